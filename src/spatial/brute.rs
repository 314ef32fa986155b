use super::SpatialIndex;
use crate::Point;

/// Linear-scan [`SpatialIndex`]. Every query costs O(n).
#[derive(Clone, Debug, Default)]
pub struct BruteForceIndex {
    entries: Vec<(Point, usize)>,
}

impl BruteForceIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpatialIndex for BruteForceIndex {
    fn insert(&mut self, point: Point, index: usize) {
        self.entries.push((point, index));
    }

    fn query_radius(&self, point: Point, radius: f64) -> Vec<usize> {
        let radius_sq = radius * radius;
        self.entries
            .iter()
            .filter(|(p, _)| p.squared_distance(point) <= radius_sq)
            .map(|&(_, idx)| idx)
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
