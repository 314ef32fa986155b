use rayon::prelude::*;

use crate::Point;
use crate::spatial::SpatialIndex;

/// Indices of every point within `eps` of a given point, itself included.
pub type Neighborhood = Vec<usize>;

/// Computes `neighborhoods[i] = index.query_radius(points[i], eps)` for every
/// point, fanning the queries out over the rayon thread pool.
///
/// Each query writes only its own output slot and the index is shared
/// read-only, so the result does not depend on scheduling. The call returns
/// once every query has finished.
pub fn precompute_neighborhoods<I: SpatialIndex>(
    index: &I,
    points: &[Point],
    eps: f64,
) -> Vec<Neighborhood> {
    points
        .par_iter()
        .map(|&p| index.query_radius(p, eps))
        .collect()
}

/// Single-threaded counterpart of [`precompute_neighborhoods`].
pub fn precompute_neighborhoods_sequential<I: SpatialIndex>(
    index: &I,
    points: &[Point],
    eps: f64,
) -> Vec<Neighborhood> {
    points.iter().map(|&p| index.query_radius(p, eps)).collect()
}
