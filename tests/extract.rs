use houghcircle::{extract_peaks, Accumulator, CircleCandidate};

fn bump(acc: &mut Accumulator, x: i32, y: i32, p: i32, votes: u32) {
    for _ in 0..votes {
        acc.increment(x, y, p);
    }
}

#[test]
fn extraction_suppresses_the_peak_window() {
    let radius_max = 5;
    let mut acc = Accumulator::new(40, 40, 3).unwrap();
    bump(&mut acc, 20, 20, 1, 5);
    bump(&mut acc, 22, 22, 0, 3);
    bump(&mut acc, 25, 25, 2, 2);

    let found = extract_peaks(&mut acc, radius_max, 1, 0.01);
    assert_eq!(
        found,
        vec![CircleCandidate {
            x: 20,
            y: 20,
            radius_offset: 1,
            votes: 5,
        }]
    );

    // Window half-width = radius_offset + radius_max + 3 = 9, so all of
    // [11, 29) x [11, 29) is zero across every radius plane.
    for x in 11..29usize {
        for y in 11..29usize {
            for p in 0..3 {
                assert_eq!(acc.get(x, y, p), Some(0));
            }
        }
    }
    assert_eq!(acc.total_votes(), 0);
}

#[test]
fn suppression_leaves_cells_outside_the_window() {
    let radius_max = 2;
    let mut acc = Accumulator::new(40, 40, 2).unwrap();
    bump(&mut acc, 20, 20, 1, 6);
    // Half-width is 1 + 2 + 3 = 6; (27, 20) lies outside [14, 26).
    bump(&mut acc, 27, 20, 0, 4);

    let found = extract_peaks(&mut acc, radius_max, 2, 0.01);
    assert_eq!(found.len(), 2);
    assert_eq!((found[0].x, found[0].y, found[0].votes), (20, 20, 6));
    assert_eq!((found[1].x, found[1].y, found[1].votes), (27, 20, 4));
}

#[test]
fn ties_keep_the_first_cell_in_scan_order() {
    let mut acc = Accumulator::new(30, 30, 2).unwrap();
    // All three cells hold the same count; scan order is x outer, y middle,
    // radius-offset inner.
    bump(&mut acc, 5, 10, 1, 4);
    bump(&mut acc, 5, 11, 0, 4);
    bump(&mut acc, 10, 5, 0, 4);

    let found = extract_peaks(&mut acc, 3, 1, 0.01);
    assert_eq!(
        found[0],
        CircleCandidate {
            x: 5,
            y: 10,
            radius_offset: 1,
            votes: 4,
        }
    );
}

#[test]
fn tie_within_a_column_prefers_the_lower_radius_offset() {
    let mut acc = Accumulator::new(30, 30, 3).unwrap();
    bump(&mut acc, 8, 8, 2, 4);
    bump(&mut acc, 8, 8, 1, 4);

    let found = extract_peaks(&mut acc, 3, 1, 0.01);
    assert_eq!(found[0].radius_offset, 1);
}

#[test]
fn exhausted_accumulator_yields_degenerate_candidates() {
    let mut acc = Accumulator::new(100, 80, 2).unwrap();
    let found = extract_peaks(&mut acc, 5, 3, 0.01);

    // Exactly max_circles results, each the first scanned cell with zero
    // votes; the scan margin is 1% of the width.
    assert_eq!(found.len(), 3);
    for candidate in found {
        assert_eq!(
            candidate,
            CircleCandidate {
                x: 1,
                y: 1,
                radius_offset: 0,
                votes: 0,
            }
        );
    }
}

#[test]
fn extraction_count_is_fixed_even_after_votes_run_out() {
    let mut acc = Accumulator::new(100, 100, 1).unwrap();
    bump(&mut acc, 20, 20, 0, 2);

    let found = extract_peaks(&mut acc, 5, 3, 0.01);
    assert_eq!(found.len(), 3);
    assert_eq!((found[0].x, found[0].y, found[0].votes), (20, 20, 2));
    assert_eq!(found[1].votes, 0);
    assert_eq!(found[2].votes, 0);
}
