use std::collections::VecDeque;

use super::neighborhood::Neighborhood;

/// Grows clusters breadth-first over precomputed neighborhoods.
///
/// The visited marks and the work queue are allocated once per run. After
/// each expansion only the indices it touched are cleared.
pub(crate) struct ClusterExpander {
    visited: Vec<bool>,
    touched: Vec<usize>,
    queue: VecDeque<usize>,
}

impl ClusterExpander {
    pub(crate) fn new(n_points: usize) -> Self {
        Self {
            visited: vec![false; n_points],
            touched: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Grows cluster `cluster_id` from the neighborhood of a core point.
    ///
    /// Every dequeued index is labeled `cluster_id`, overwriting whatever
    /// label it held: tentative noise, or an earlier cluster for a border
    /// point shared between clusters. Core points are never shared, so only
    /// border points can change hands. Only indices whose own neighborhood
    /// holds at least `min_pts` entries (core points) push their neighbors
    /// onto the queue; border points are labeled and stop there. Duplicate
    /// queue entries are skipped through the visited marks, which never
    /// carry over from one expansion to the next.
    ///
    /// Returns the number of indices labeled by this call.
    pub(crate) fn expand(
        &mut self,
        seed: &[usize],
        cluster_id: i32,
        neighborhoods: &[Neighborhood],
        min_pts: usize,
        labels: &mut [i32],
    ) -> usize {
        self.queue.extend(seed.iter().copied());

        while let Some(idx) = self.queue.pop_front() {
            if self.visited[idx] {
                continue;
            }
            self.visited[idx] = true;
            self.touched.push(idx);
            labels[idx] = cluster_id;

            let nbrs = &neighborhoods[idx];
            if nbrs.len() >= min_pts {
                let visited = &self.visited;
                self.queue.extend(nbrs.iter().copied().filter(|&n| !visited[n]));
            }
        }

        let claimed = self.touched.len();
        for idx in self.touched.drain(..) {
            self.visited[idx] = false;
        }
        claimed
    }
}
