#![cfg(feature = "rayon")]

use houghcircle::{
    cast_votes, cast_votes_par, Accumulator, Detector, DetectorConfig, EdgeMap, RadiusBand,
    SearchRegion,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_edges(width: usize, height: usize, count: usize, seed: u64) -> EdgeMap {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = EdgeMap::new(width, height).unwrap();
    for _ in 0..count {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        edges.set(x, y, true);
    }
    edges
}

#[test]
fn parallel_voting_matches_sequential() {
    let band = RadiusBand {
        radius_min: 5,
        radius_max: 10,
    };
    let edges = random_edges(90, 90, 400, 7);

    let mut sequential = Accumulator::new(90, 90, band.count()).unwrap();
    cast_votes(&edges, &mut sequential, band);

    let mut parallel = Accumulator::new(90, 90, band.count()).unwrap();
    cast_votes_par(&edges, &mut parallel, band).unwrap();

    assert_eq!(sequential.as_slice(), parallel.as_slice());
}

#[test]
fn parallel_detection_matches_sequential() {
    let edges = random_edges(120, 100, 600, 11);
    let region = SearchRegion::full(120, 100).unwrap();
    let config = DetectorConfig {
        radius_min: 8,
        radius_max: 14,
        max_circles: 3,
        ..DetectorConfig::default()
    };

    let sequential = Detector::new(config).detect(&edges, region).unwrap();
    let parallel = Detector::new(DetectorConfig {
        parallel: true,
        ..config
    })
    .detect(&edges, region)
    .unwrap();

    assert_eq!(sequential, parallel);
}
