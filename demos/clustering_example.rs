use dbscan2d::{Dbscan, Matrix, NOISE, points_from_matrix};
use ndarray::{Axis, array, concatenate};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== DBSCAN on 2-D blobs ===\n");

    let mut rng = StdRng::seed_from_u64(2024);
    let noise = Normal::new(0.0, 0.3).expect("valid standard deviation");

    // Three gaussian blobs around (2, 2), (8, 8) and (2, 8), plus a few outliers
    let mut blobs = Vec::new();
    for center in [[2.0, 2.0], [8.0, 8.0], [2.0, 8.0]] {
        let offsets = Matrix::random_using((200, 2), noise, &mut rng);
        blobs.push(offsets + &array![center[0], center[1]]);
    }
    blobs.push(array![[5.0, 5.0], [0.0, 0.0], [10.0, 0.0]]);

    let views: Vec<_> = blobs.iter().map(|b| b.view()).collect();
    let x = concatenate(Axis(0), &views)?;
    println!("Dataset: {} points", x.nrows());
    println!("Expected: 3 natural clusters + some noise points\n");

    let configs = vec![
        (0.1, 4, "Tight clusters"),
        (0.3, 4, "Medium density"),
        (1.0, 4, "Loose clusters"),
        (0.3, 12, "Higher min_pts"),
    ];

    for &(eps, min_pts, description) in &configs {
        match run(&x, eps, min_pts) {
            Ok(result) => println!("DBSCAN(eps={}, min_pts={}): {} - {}", eps, min_pts, description, result),
            Err(e) => println!("DBSCAN(eps={}, min_pts={}) failed: {}", eps, min_pts, e),
        }
    }

    println!("\n=== Detailed Analysis ===");
    let points = points_from_matrix(&x)?;
    let mut dbscan = Dbscan::new(&points, 0.3, 4)?;
    let labels = dbscan.fit();

    println!("DBSCAN (eps={}, min_pts={}) results:", dbscan.eps(), dbscan.min_pts());
    println!("  Number of core samples: {}", dbscan.core_sample_indices.as_ref().map_or(0, Vec::len));
    print_cluster_summary(&labels);

    println!("\n=== Invalid parameters ===");
    if let Err(e) = Dbscan::new(&points, 0.0, 4) {
        println!("  eps = 0 rejected: {}", e);
    }
    if let Err(e) = Dbscan::new(&points, 0.3, 0) {
        println!("  min_pts = 0 rejected: {}", e);
    }

    Ok(())
}

fn run(x: &Matrix, eps: f64, min_pts: i32) -> Result<String, dbscan2d::DbscanError> {
    let mut dbscan = Dbscan::from_matrix(x, eps, min_pts)?;
    dbscan.fit();

    Ok(format!(
        "{} clusters, {} noise points",
        dbscan.get_n_clusters().unwrap_or(0),
        dbscan.get_n_noise_points().unwrap_or(0)
    ))
}

fn print_cluster_summary(labels: &[i32]) {
    let max_label = labels.iter().copied().max().unwrap_or(NOISE);

    let noise = labels.iter().filter(|&&l| l == NOISE).count();
    println!("  Noise: {} points", noise);
    for cluster_id in 1..=max_label {
        let count = labels.iter().filter(|&&l| l == cluster_id).count();
        println!("  Cluster {}: {} points", cluster_id, count);
    }
}
