//! Iterative peak extraction with neighborhood suppression.
//!
//! Each iteration scans the accumulator for the highest-voted cell, records
//! it, and zeroes a square window around it so the next iteration finds a
//! distinct circle. The loop always runs exactly `max_circles` times; an
//! exhausted accumulator yields zero-vote candidates at the first scanned
//! cell, which downstream report consumers rely on.

use crate::accum::Accumulator;
use crate::trace::{trace_event, trace_span};

/// Extra suppression half-width absorbing rasterization overlap between
/// neighboring radii.
const SUPPRESSION_PAD: i32 = 3;

/// Extracted accumulator peak in region-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleCandidate {
    /// Region-local center x.
    pub x: usize,
    /// Region-local center y.
    pub y: usize,
    /// Radius-offset index into the tested band.
    pub radius_offset: usize,
    /// Vote count at the peak cell when it was extracted.
    pub votes: u32,
}

/// Extracts `max_circles` candidates from the accumulator, suppressing a
/// window of half-width `radius_offset + radius_max + 3` after each.
///
/// The scan skips a `margin_fraction` strip of the region border (computed
/// from the width, applied to both axes) and walks cells in x-outer,
/// y-middle, radius-inner order; ties keep the first cell encountered, which
/// makes the result deterministic.
pub fn extract_peaks(
    accumulator: &mut Accumulator,
    radius_max: u32,
    max_circles: usize,
    margin_fraction: f64,
) -> Vec<CircleCandidate> {
    let margin = (accumulator.width() as f64 * margin_fraction) as usize;
    let x_end = accumulator.width().saturating_sub(margin);
    let y_end = accumulator.height().saturating_sub(margin);

    let _span = trace_span!("peak_extraction", circles = max_circles).entered();

    let mut found = Vec::with_capacity(max_circles);
    for _ in 0..max_circles {
        let mut best = CircleCandidate {
            x: margin,
            y: margin,
            radius_offset: 0,
            votes: 0,
        };
        let mut best_votes: i64 = -1;

        for u in margin..x_end {
            for v in margin..y_end {
                let Some(column) = accumulator.radius_column(u, v) else {
                    continue;
                };
                for (p, &votes) in column.iter().enumerate() {
                    if i64::from(votes) > best_votes {
                        best = CircleCandidate {
                            x: u,
                            y: v,
                            radius_offset: p,
                            votes,
                        };
                        best_votes = i64::from(votes);
                    }
                }
            }
        }

        let half = best.radius_offset as i32 + radius_max as i32 + SUPPRESSION_PAD;
        accumulator.clear_region(best.x as i32, best.y as i32, half);

        trace_event!("peak", x = best.x, y = best.y, votes = best.votes);
        found.push(best);
    }

    found
}
