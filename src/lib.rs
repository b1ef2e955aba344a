//! Hough-transform circle detection on binary edge maps.
//!
//! This crate covers the accumulator-based voting engine and the iterative
//! peak extraction that turns vote state into ranked circle candidates:
//! a midpoint-circle rasterizer casts votes into a dense 3D accumulator,
//! and extraction repeatedly picks the highest-voted cell and suppresses
//! its neighborhood. Optional row-parallel voting is available via the
//! `rayon` feature; edge detection is an external concern.

pub mod accum;
pub mod detect;
pub mod extract;
pub mod grid;
pub mod raster;
mod trace;
pub mod util;
pub mod vote;

pub use accum::Accumulator;
pub use detect::{circle_polyline, Circle, Detector, DetectorConfig};
pub use extract::{extract_peaks, CircleCandidate};
pub use grid::{EdgeMap, SearchRegion};
pub use raster::{circle_offsets, for_each_circle_offset, CircleTable, RadiusBand};
pub use util::{HoughError, HoughResult};
pub use vote::cast_votes;
#[cfg(feature = "rayon")]
pub use vote::cast_votes_par;
