pub mod file_io;
pub mod point;
pub mod types_and_const;

pub use point::{Point, PointSet};

#[cfg(test)]
#[path = "tests/point_tests.rs"]
pub mod point_tests;
