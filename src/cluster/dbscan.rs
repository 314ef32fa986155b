use std::borrow::Cow;
use std::collections::HashSet;

use super::expand::ClusterExpander;
use super::neighborhood::{precompute_neighborhoods, precompute_neighborhoods_sequential};
use crate::spatial::{KdTreeIndex, SpatialIndex};
use crate::{DbscanError, Matrix, NOISE, Point, UNVISITED, points_from_matrix};

#[derive(Clone, Debug)]
pub struct Dbscan<'a, I = KdTreeIndex> {
    pub labels: Option<Vec<i32>>,
    pub core_sample_indices: Option<Vec<usize>>,
    points: Cow<'a, [Point]>,
    index: I,
    eps: f64,
    min_pts: usize,
    parallel: bool,
}

impl<'a> Dbscan<'a, KdTreeIndex> {
    /// Validates the parameters and builds a kd-tree over `points`.
    pub fn new(points: &'a [Point], eps: f64, min_pts: i32) -> Result<Self, DbscanError> {
        let index = KdTreeIndex::with_capacity(points.len());
        Self::build(Cow::Borrowed(points), eps, min_pts, index)
    }

    /// Clusters the rows of an `n x 2` matrix.
    pub fn from_matrix(x: &Matrix, eps: f64, min_pts: i32) -> Result<Dbscan<'static>, DbscanError> {
        let points = points_from_matrix(x)?;
        let index = KdTreeIndex::with_capacity(points.len());
        Dbscan::build(Cow::Owned(points), eps, min_pts, index)
    }
}

impl<'a, I: SpatialIndex> Dbscan<'a, I> {
    /// Same as [`Dbscan::new`] but registers the points in a caller-supplied,
    /// empty index.
    pub fn with_index(
        points: &'a [Point],
        eps: f64,
        min_pts: i32,
        index: I,
    ) -> Result<Self, DbscanError> {
        Self::build(Cow::Borrowed(points), eps, min_pts, index)
    }

    fn build(
        points: Cow<'a, [Point]>,
        eps: f64,
        min_pts: i32,
        mut index: I,
    ) -> Result<Self, DbscanError> {
        if !(eps.is_finite() && eps > 0.0) {
            return Err(DbscanError::InvalidEps { eps });
        }
        if min_pts <= 0 {
            return Err(DbscanError::InvalidMinPts { min_pts });
        }
        if !index.is_empty() {
            return Err(DbscanError::IndexNotEmpty { len: index.len() });
        }

        for (i, p) in points.iter().enumerate() {
            index.insert(*p, i);
        }
        log::debug!("dbscan: indexed {} points, eps = {}, min_pts = {}", points.len(), eps, min_pts);

        Ok(Self {
            labels: None,
            core_sample_indices: None,
            points,
            index,
            eps,
            min_pts: min_pts as usize,
            parallel: true,
        })
    }

    /// Chooses between the rayon fan-out (default) and a single-threaded
    /// neighborhood precompute. Both yield the same labels.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Runs the clustering and returns one label per input point: `-1` for
    /// noise, `1..=k` for the cluster ids, numbered in the order their first
    /// core point appears in the input.
    pub fn fit(&mut self) -> Vec<i32> {
        let n = self.points.len();

        let neighborhoods = if self.parallel {
            precompute_neighborhoods(&self.index, &self.points, self.eps)
        } else {
            precompute_neighborhoods_sequential(&self.index, &self.points, self.eps)
        };
        log::debug!(
            "dbscan: neighborhoods ready, mean size {:.3}",
            neighborhoods.iter().map(Vec::len).sum::<usize>() as f64 / n.max(1) as f64
        );

        let mut labels = vec![UNVISITED; n];
        let mut expander = ClusterExpander::new(n);
        let mut cluster_id = 0;
        for i in 0..n {
            if labels[i] != UNVISITED {
                continue;
            }
            let neighbors = &neighborhoods[i];
            if neighbors.len() < self.min_pts {
                labels[i] = NOISE;
            } else {
                cluster_id += 1;
                let size = expander.expand(neighbors, cluster_id, &neighborhoods, self.min_pts, &mut labels);
                log::trace!("dbscan: cluster {} seeded at point {} claimed {} points", cluster_id, i, size);
            }
        }

        let core_samples: Vec<usize> = (0..n)
            .filter(|&i| neighborhoods[i].len() >= self.min_pts)
            .collect();
        log::info!(
            "dbscan: {} points, {} clusters, {} noise, {} core",
            n,
            cluster_id,
            labels.iter().filter(|&&l| l == NOISE).count(),
            core_samples.len()
        );

        self.labels = Some(labels.clone());
        self.core_sample_indices = Some(core_samples);
        labels
    }

    pub fn get_n_clusters(&self) -> Option<usize> {
        self.labels.as_ref().map(|labels| {
            let unique_clusters: HashSet<i32> = labels.iter().copied().filter(|&l| l > 0).collect();
            unique_clusters.len()
        })
    }

    pub fn get_n_noise_points(&self) -> Option<usize> {
        self.labels
            .as_ref()
            .map(|labels| labels.iter().filter(|&&l| l == NOISE).count())
    }

    pub fn is_core_sample(&self, sample_idx: usize) -> Option<bool> {
        self.core_sample_indices
            .as_ref()
            .map(|core_indices| core_indices.binary_search(&sample_idx).is_ok())
    }
}
