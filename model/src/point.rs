use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice::Iter;

/// A share as a point `(x, y)` on the sharing polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ordered sequence of points handed out by a point supply.
///
/// Only a prefix of length `k` is ever interpolated; the rest is carried
/// along so callers can report how many shares were available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new(points: Vec<Point>) -> Self {
        PointSet { points }
    }

    /// Builds a set where the i-th value (0-based) becomes the point `(i + 1, y)`.
    pub fn from_indexed_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BigInt>,
    {
        let points = values
            .into_iter()
            .enumerate()
            .map(|(idx, y)| Point::new(BigInt::from(idx + 1), y))
            .collect();
        PointSet { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Returns the first `k` points, or `None` if fewer are available.
    pub fn first(&self, k: usize) -> Option<&[Point]> {
        self.points.get(..k)
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        PointSet::new(points)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
