pub mod document;
mod error;

pub use document::{EncodedShare, Keys, ShareDocument};
pub use error::SupplyError;

#[cfg(test)]
#[path = "tests/document_tests.rs"]
pub mod document_tests;
