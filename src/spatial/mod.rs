//! Radius queries over 2-D points.
//!
//! The clustering engine only needs two capabilities from a spatial index:
//! registering every point under its position in the input, then answering
//! "which identities lie within `radius` of this point". Any structure that
//! honors the [`SpatialIndex`] contract can be plugged into
//! [`Dbscan::with_index`](crate::Dbscan::with_index):
//!
//! - [`KdTreeIndex`]: a kd-tree, the default.
//! - [`BruteForceIndex`]: a linear scan, useful for small inputs and as a
//!   reference in tests.

mod brute;
mod kdtree;

pub use brute::BruteForceIndex;
pub use kdtree::KdTreeIndex;

use crate::Point;

/// A 2-D index answering inclusive Euclidean radius queries.
///
/// All inserts happen before the first query. Queries take `&self` and may be
/// issued from many threads at once, hence the `Sync` bound.
pub trait SpatialIndex: Sync {
    /// Registers `point` under `index`.
    fn insert(&mut self, point: Point, index: usize);

    /// Returns every registered identity whose distance to `point` is
    /// `<= radius`, in unspecified order.
    ///
    /// A registered point queried against itself is always part of the result.
    fn query_radius(&self, point: Point, radius: f64) -> Vec<usize>;

    /// Number of registered points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray_rand::RandomExt;
    use ndarray_rand::rand_distr::Uniform;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build<I: SpatialIndex>(mut index: I, points: &[Point]) -> I {
        for (i, p) in points.iter().enumerate() {
            index.insert(*p, i);
        }
        index
    }

    #[test]
    fn test_kdtree_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        let coords = crate::Matrix::random_using((500, 2), Uniform::new(0.0, 10.0), &mut rng);
        let points = crate::points_from_matrix(&coords).unwrap();

        let kd = build(KdTreeIndex::new(), &points);
        let brute = build(BruteForceIndex::new(), &points);
        assert_eq!(kd.len(), 500);
        assert_eq!(brute.len(), 500);

        for radius in [0.1, 0.5, 2.0] {
            for p in points.iter().step_by(25) {
                let mut a = kd.query_radius(*p, radius);
                let mut b = brute.query_radius(*p, radius);
                a.sort_unstable();
                b.sort_unstable();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, -1.0),
            Point::new(1.0, 1.0),
        ];
        let kd = build(KdTreeIndex::new(), &points);
        let brute = build(BruteForceIndex::new(), &points);

        for index in [&kd as &dyn SpatialIndex, &brute as &dyn SpatialIndex] {
            let mut found = index.query_radius(points[0], 1.0);
            found.sort_unstable();
            assert_eq!(found, vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_self_membership() {
        let points = vec![Point::new(3.5, -2.25), Point::new(100.0, 100.0)];
        let kd = build(KdTreeIndex::new(), &points);

        assert_eq!(kd.query_radius(points[0], 1e-9), vec![0]);
        assert_eq!(kd.query_radius(points[1], 1e-9), vec![1]);
    }

    #[test]
    fn test_duplicate_points() {
        let points = vec![Point::new(2.0, -1.0); 300];
        let kd = build(KdTreeIndex::new(), &points);

        let mut found = kd.query_radius(points[0], 0.1);
        found.sort_unstable();
        assert_eq!(found, (0..300).collect::<Vec<_>>());
        assert!(kd.query_radius(Point::new(2.0, 0.0), 0.5).is_empty());
    }

    #[test]
    fn test_shared_axis_coordinates_match_brute_force() {
        // A vertical line and a horizontal line of 300 points each, crossing.
        let points: Vec<Point> = (0..300)
            .map(|i| Point::new(0.0, i as f64 * 0.01))
            .chain((0..300).map(|i| Point::new(i as f64 * 0.01 - 1.5, 1.5)))
            .collect();
        let kd = build(KdTreeIndex::new(), &points);
        let brute = build(BruteForceIndex::new(), &points);

        for p in points.iter().step_by(7) {
            let mut a = kd.query_radius(*p, 0.05);
            let mut b = brute.query_radius(*p, 0.05);
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_insert_after_query() {
        let mut kd = build(KdTreeIndex::new(), &[Point::new(0.0, 0.0)]);
        assert_eq!(kd.query_radius(Point::new(0.0, 0.0), 1.0), vec![0]);

        kd.insert(Point::new(0.5, 0.0), 7);
        let mut found = kd.query_radius(Point::new(0.0, 0.0), 1.0);
        found.sort_unstable();
        assert_eq!(found, vec![0, 7]);
    }

    #[test]
    fn test_empty_index() {
        let kd = KdTreeIndex::new();
        assert!(kd.is_empty());
        assert!(kd.query_radius(Point::new(0.0, 0.0), 1.0).is_empty());
    }
}
