//! Density-based clustering of 2-D points.
//!
//! `dbscan2d` labels every point of a finite 2-D point set as either a member
//! of a dense cluster or as noise, without knowing the number of clusters in
//! advance. Neighborhood queries go through a [`SpatialIndex`] (a kd-tree by
//! default) and are computed once per point, in parallel, before the
//! sequential labeling pass.
//!
//! # Example
//!
//! ```rust
//! use dbscan2d::{Dbscan, Point, NOISE};
//!
//! let points = vec![
//!     Point::new(1.0, 1.0),
//!     Point::new(1.2, 1.1),
//!     Point::new(1.1, 1.2),
//!     Point::new(8.0, 8.0),
//!     Point::new(8.1, 8.1),
//!     Point::new(8.2, 7.9),
//!     Point::new(15.0, 1.0), // outlier
//! ];
//!
//! let mut dbscan = Dbscan::new(&points, 1.0, 2).unwrap();
//! let labels = dbscan.fit();
//!
//! assert_eq!(labels, vec![1, 1, 1, 2, 2, 2, NOISE]);
//! assert_eq!(dbscan.get_n_clusters(), Some(2));
//! ```

pub use ndarray::{Array2, ArrayView1};

pub mod cluster;
pub mod error;
pub mod point;
pub mod spatial;

pub use cluster::Dbscan;
pub use error::DbscanError;
pub use point::{Point, points_from_matrix};
pub use spatial::{BruteForceIndex, KdTreeIndex, SpatialIndex};

pub type Matrix = Array2<f64>;

/// Label of a point not reachable from any core point.
pub const NOISE: i32 = -1;

/// Transient label of a point the labeling pass has not reached yet.
/// Never present in a finished label array.
pub const UNVISITED: i32 = 0;
