use houghcircle::{for_each_circle_offset, Detector, DetectorConfig, EdgeMap, SearchRegion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn stamp_circle(edges: &mut EdgeMap, cx: i32, cy: i32, radius: i32) {
    for_each_circle_offset(radius, |dx, dy| {
        let (x, y) = (cx + dx, cy + dy);
        if x >= 0 && y >= 0 {
            edges.set(x as usize, y as usize, true);
        }
    });
}

#[test]
fn pipeline_finds_a_single_circle() {
    let mut edges = EdgeMap::new(100, 100).unwrap();
    stamp_circle(&mut edges, 50, 50, 15);

    let detector = Detector::new(DetectorConfig {
        radius_min: 10,
        radius_max: 20,
        max_circles: 1,
        ..DetectorConfig::default()
    });
    let region = SearchRegion::full(100, 100).unwrap();
    let circles = detector.detect(&edges, region).unwrap();

    assert_eq!(circles.len(), 1);
    let best = circles[0];
    assert!((best.x - 50).abs() <= 1, "expected x near 50, got {}", best.x);
    assert!((best.y - 50).abs() <= 1, "expected y near 50, got {}", best.y);
    assert_eq!(best.radius, 15);
    assert!(best.votes > 0);
}

#[test]
fn pipeline_recovers_two_separated_circles() {
    let mut edges = EdgeMap::new(100, 100).unwrap();
    stamp_circle(&mut edges, 30, 30, 12);
    stamp_circle(&mut edges, 70, 70, 12);

    let detector = Detector::new(DetectorConfig {
        radius_min: 10,
        radius_max: 16,
        max_circles: 2,
        ..DetectorConfig::default()
    });
    let region = SearchRegion::full(100, 100).unwrap();
    let circles = detector.detect(&edges, region).unwrap();

    assert_eq!(circles.len(), 2);
    for expected in [(30, 30), (70, 70)] {
        let hit = circles.iter().find(|c| {
            (c.x - expected.0).abs() <= 1 && (c.y - expected.1).abs() <= 1 && c.radius == 12
        });
        assert!(
            hit.is_some(),
            "circle at {expected:?} not recovered: {circles:?}"
        );
        assert!(hit.unwrap().votes > 0);
    }
}

#[test]
fn pipeline_reports_degenerate_candidates_on_empty_input() {
    let edges = EdgeMap::new(64, 64).unwrap();
    let detector = Detector::new(DetectorConfig {
        radius_min: 4,
        radius_max: 8,
        max_circles: 3,
        ..DetectorConfig::default()
    });
    let region = SearchRegion::new(5, 7, 64, 64).unwrap();
    let circles = detector.detect(&edges, region).unwrap();

    // The accumulator never received a vote; extraction still returns the
    // requested count, pinned to the first scanned cell translated by the
    // region origin.
    assert_eq!(circles.len(), 3);
    for circle in circles {
        assert_eq!((circle.x, circle.y), (5, 7));
        assert_eq!(circle.radius, 4);
        assert_eq!(circle.votes, 0);
    }
}

#[test]
fn pipeline_translates_region_origin() {
    let mut edges = EdgeMap::new(100, 100).unwrap();
    stamp_circle(&mut edges, 50, 50, 15);

    let detector = Detector::new(DetectorConfig {
        radius_min: 10,
        radius_max: 20,
        max_circles: 1,
        ..DetectorConfig::default()
    });
    let region = SearchRegion::new(13, -4, 100, 100).unwrap();
    let circles = detector.detect(&edges, region).unwrap();

    let best = circles[0];
    assert!((best.x - 63).abs() <= 1);
    assert!((best.y - 46).abs() <= 1);
    assert_eq!(best.radius, 15);
}

#[test]
fn pipeline_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut edges = EdgeMap::new(80, 80).unwrap();
    for _ in 0..300 {
        let x = rng.random_range(0..80);
        let y = rng.random_range(0..80);
        edges.set(x, y, true);
    }

    let config = DetectorConfig {
        radius_min: 6,
        radius_max: 12,
        max_circles: 3,
        ..DetectorConfig::default()
    };
    let region = SearchRegion::full(80, 80).unwrap();

    let first = Detector::new(config).detect(&edges, region).unwrap();
    let second = Detector::new(config).detect(&edges, region).unwrap();
    assert_eq!(first, second);
}

#[test]
fn report_line_matches_the_consumer_format() {
    let mut edges = EdgeMap::new(100, 100).unwrap();
    stamp_circle(&mut edges, 50, 50, 15);

    let detector = Detector::new(DetectorConfig {
        radius_min: 10,
        radius_max: 20,
        max_circles: 1,
        ..DetectorConfig::default()
    });
    let region = SearchRegion::full(100, 100).unwrap();
    let circles = detector.detect(&edges, region).unwrap();

    let best = circles[0];
    assert_eq!(
        best.report_line(),
        format!(
            "Found circle (x, y, radius): ({}, {}, {})",
            best.x, best.y, best.radius
        )
    );
}
