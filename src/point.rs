use ndarray::ArrayView1;

use crate::{DbscanError, Matrix};

/// An immutable position in the plane.
///
/// Points carry no identity of their own: the clustering engine refers to a
/// point by its position in the input slice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Squared Euclidean distance, summed in axis order.
    #[inline]
    pub fn squared_distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(self, other: Self) -> f64 {
        self.squared_distance(other).sqrt()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        p.to_array()
    }
}

impl TryFrom<ArrayView1<'_, f64>> for Point {
    type Error = DbscanError;

    fn try_from(row: ArrayView1<'_, f64>) -> Result<Self, Self::Error> {
        match row.as_slice() {
            Some(&[x, y]) => Ok(Self { x, y }),
            _ if row.len() == 2 => Ok(Self { x: row[0], y: row[1] }),
            _ => Err(DbscanError::DimensionMismatch { ncols: row.len() }),
        }
    }
}

/// Converts the rows of an `n x 2` matrix into points.
pub fn points_from_matrix(x: &Matrix) -> Result<Vec<Point>, DbscanError> {
    if x.ncols() != 2 {
        return Err(DbscanError::DimensionMismatch { ncols: x.ncols() });
    }
    x.rows().into_iter().map(Point::try_from).collect()
}
