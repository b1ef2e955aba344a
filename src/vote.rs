//! Voting pass: casts circle votes for every edge pixel in the margin.
//!
//! Each edge pixel votes for every circle in the radius band that could pass
//! through it. The pass stays a fixed `radius_max` away from the region
//! border, so no rasterized circle leaves the accumulator; edge pixels
//! inside that margin strip never vote, a coverage limitation inherited by
//! design.

use crate::accum::Accumulator;
use crate::grid::EdgeMap;
use crate::raster::{CircleTable, RadiusBand};
use crate::trace::{trace_event, trace_span};
#[cfg(feature = "rayon")]
use crate::util::HoughResult;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[cfg(feature = "rayon")]
const ROWS_PER_CHUNK: usize = 32;

/// Casts votes for every edge pixel into the accumulator.
///
/// Mutates only the accumulator; the edge map is read-only input.
pub fn cast_votes(edges: &EdgeMap, accumulator: &mut Accumulator, band: RadiusBand) {
    let table = CircleTable::build(band);
    let margin = band.radius_max as usize;
    let x_end = accumulator.width().saturating_sub(margin);
    let y_end = accumulator.height().saturating_sub(margin);

    let _span = trace_span!(
        "voting_pass",
        width = accumulator.width(),
        height = accumulator.height(),
        radii = table.len()
    )
    .entered();

    let mut voters = 0usize;
    for u in margin..x_end {
        for v in margin..y_end {
            if !edges.is_edge(u, v) {
                continue;
            }
            voters += 1;
            vote_at(accumulator, &table, u, v);
        }
    }

    trace_event!("votes_cast", voters = voters);
}

/// Row-parallel voting pass, equivalent to [`cast_votes`].
///
/// Rows are split into chunks, each chunk votes into its own partial
/// accumulator, and the partials are merged by element-wise addition. Vote
/// addition commutes, so the result is bit-identical to the sequential pass.
#[cfg(feature = "rayon")]
pub fn cast_votes_par(
    edges: &EdgeMap,
    accumulator: &mut Accumulator,
    band: RadiusBand,
) -> HoughResult<()> {
    let table = CircleTable::build(band);
    let margin = band.radius_max as usize;
    let x_end = accumulator.width().saturating_sub(margin);
    let y_end = accumulator.height().saturating_sub(margin);
    let rows: Vec<usize> = (margin..y_end).collect();

    let _span = trace_span!(
        "voting_pass",
        width = accumulator.width(),
        height = accumulator.height(),
        radii = table.len(),
        parallel = true
    )
    .entered();

    let (width, height, radius_count) = (
        accumulator.width(),
        accumulator.height(),
        accumulator.radius_count(),
    );
    let partials: Vec<HoughResult<Accumulator>> = rows
        .par_chunks(ROWS_PER_CHUNK)
        .map(|chunk| {
            let mut partial = Accumulator::new(width, height, radius_count)?;
            for &v in chunk {
                for u in margin..x_end {
                    if edges.is_edge(u, v) {
                        vote_at(&mut partial, &table, u, v);
                    }
                }
            }
            Ok(partial)
        })
        .collect();

    let chunks = partials.len();
    for partial in partials {
        accumulator.merge_from(&partial?);
    }

    trace_event!("votes_cast", chunks = chunks);
    Ok(())
}

#[inline]
fn vote_at(accumulator: &mut Accumulator, table: &CircleTable, u: usize, v: usize) {
    for (p, offsets) in table.planes().enumerate() {
        for &(dx, dy) in offsets {
            accumulator.increment(u as i32 + dx, v as i32 + dy, p as i32);
        }
    }
}
