//! Error types for houghcircle.

use thiserror::Error;

/// Result alias for houghcircle operations.
pub type HoughResult<T> = std::result::Result<T, HoughError>;

/// Errors that can occur when configuring or running the detector.
#[derive(Debug, Error, PartialEq)]
pub enum HoughError {
    /// The radius band is empty or inverted.
    #[error("invalid radius band: min {radius_min}, max {radius_max}")]
    InvalidRadiusBand { radius_min: u32, radius_max: u32 },
    /// The search region leaves no voting area for the configured band.
    #[error("region {width}x{height} leaves no voting area for max radius {radius_max}")]
    RegionTooSmall {
        width: usize,
        height: usize,
        radius_max: u32,
    },
    /// A grid was requested with a zero or overflowing dimension.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The backing buffer is shorter than the grid requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The edge map does not cover the search region.
    #[error(
        "edge map {edge_width}x{edge_height} does not match region {region_width}x{region_height}"
    )]
    RegionMismatch {
        edge_width: usize,
        edge_height: usize,
        region_width: usize,
        region_height: usize,
    },
    /// The accumulator size overflows or cannot be allocated.
    #[error("accumulator of {width}x{height}x{radius_count} cells cannot be allocated")]
    AccumulatorAllocation {
        width: usize,
        height: usize,
        radius_count: usize,
    },
    /// The search-area fraction must lie in (0, 1].
    #[error("search area fraction {fraction} outside (0, 1]")]
    InvalidSearchAreaFraction { fraction: f64 },
    /// Image decoding or I/O failure.
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
