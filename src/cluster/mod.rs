//! Density-based clustering.
//!
//! A run has two phases:
//! - neighborhood precompute: one radius query per point, fanned out over
//!   the rayon thread pool, each result cached for the whole run;
//! - labeling: a single-threaded scan in input order that marks points as
//!   tentative noise or seeds a new cluster and grows it breadth-first over
//!   the cached neighborhoods.
//!
//! # Examples
//!
//! ## Clustering a point slice
//! ```rust
//! use dbscan2d::{Dbscan, Point};
//!
//! let points: Vec<Point> = (0..20)
//!     .map(|i| Point::new(i as f64 * 0.1, 0.0))
//!     .chain((0..20).map(|i| Point::new(50.0 + i as f64 * 0.1, 0.0)))
//!     .collect();
//!
//! let mut dbscan = Dbscan::new(&points, 0.25, 3).unwrap();
//! let labels = dbscan.fit();
//!
//! assert!(labels[..20].iter().all(|&l| l == 1));
//! assert!(labels[20..].iter().all(|&l| l == 2));
//! ```
//!
//! ## Clustering an `n x 2` matrix with a brute-force index
//! ```rust
//! use dbscan2d::{BruteForceIndex, Dbscan, points_from_matrix};
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [0.0, 0.5], [0.5, 0.0], [9.0, 9.0]];
//! let points = points_from_matrix(&x).unwrap();
//!
//! let mut dbscan = Dbscan::with_index(&points, 1.0, 3, BruteForceIndex::new())
//!     .unwrap()
//!     .parallel(false);
//! assert_eq!(dbscan.fit(), vec![1, 1, 1, -1]);
//! assert_eq!(dbscan.get_n_noise_points(), Some(1));
//! ```

mod dbscan;
mod expand;
mod neighborhood;

pub use dbscan::Dbscan;
pub use neighborhood::{Neighborhood, precompute_neighborhoods, precompute_neighborhoods_sequential};
