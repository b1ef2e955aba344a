//! Convenience helpers for building edge maps via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Edge detection itself is
//! external; these helpers only consume a detector's output written as an
//! image, treating pixels above a threshold as edges.

use crate::grid::EdgeMap;
use crate::util::{HoughError, HoughResult};
use std::path::Path;

/// Builds an edge map from a grayscale image buffer.
pub fn edge_map_from_gray_image(img: &image::GrayImage, threshold: u8) -> HoughResult<EdgeMap> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    EdgeMap::from_gray(img.as_raw(), width, height, threshold)
}

/// Loads an image from disk and thresholds it into an edge map.
pub fn load_edge_map<P: AsRef<Path>>(path: P, threshold: u8) -> HoughResult<EdgeMap> {
    let img = image::open(path).map_err(|err| HoughError::ImageIo {
        reason: err.to_string(),
    })?;
    edge_map_from_gray_image(&img.to_luma8(), threshold)
}
