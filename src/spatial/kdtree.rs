use std::fmt;
use std::sync::OnceLock;

use kiddo::{ImmutableKdTree, SquaredEuclidean};

use super::SpatialIndex;
use crate::Point;

// Relative slack applied to the tree query so that points exactly on the
// boundary survive whatever comparison the tree uses internally. The exact
// `<=` test is re-applied on the returned squared distances.
const QUERY_SLACK: f64 = 1e-9;

/// Kd-tree backed [`SpatialIndex`].
///
/// Inserted points are buffered and the tree is built once, on the first
/// query. The immutable kiddo tree accepts any number of points sharing a
/// coordinate (duplicates, axis-aligned lines, integer grids). Inserting
/// after a query discards the built tree; the next query rebuilds it.
pub struct KdTreeIndex {
    coords: Vec<[f64; 2]>,
    ids: Vec<usize>,
    tree: OnceLock<ImmutableKdTree<f64, 2>>,
}

impl KdTreeIndex {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(capacity),
            ids: Vec::with_capacity(capacity),
            tree: OnceLock::new(),
        }
    }

    fn tree(&self) -> &ImmutableKdTree<f64, 2> {
        self.tree.get_or_init(|| {
            log::debug!("KdTreeIndex: building tree over {} points", self.coords.len());
            ImmutableKdTree::new_from_slice(&self.coords)
        })
    }
}

impl fmt::Debug for KdTreeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTreeIndex")
            .field("len", &self.coords.len())
            .field("built", &self.tree.get().is_some())
            .finish_non_exhaustive()
    }
}

impl Default for KdTreeIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SpatialIndex for KdTreeIndex {
    fn insert(&mut self, point: Point, index: usize) {
        self.coords.push(point.to_array());
        self.ids.push(index);
        self.tree = OnceLock::new();
    }

    fn query_radius(&self, point: Point, radius: f64) -> Vec<usize> {
        if self.coords.is_empty() {
            return Vec::new();
        }
        let radius_sq = radius * radius;
        // Tree items are positions in `coords`.
        self.tree()
            .within_unsorted::<SquaredEuclidean>(&point.to_array(), radius_sq * (1.0 + QUERY_SLACK))
            .into_iter()
            .filter(|n| n.distance <= radius_sq)
            .map(|n| self.ids[n.item as usize])
            .collect()
    }

    fn len(&self) -> usize {
        self.coords.len()
    }
}
