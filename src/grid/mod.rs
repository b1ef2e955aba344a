//! Search regions and binary edge grids.
//!
//! `EdgeMap` is an owned binary grid sized to one `SearchRegion`. The map is
//! the immutable input of a detection run; every pixel is either an edge
//! point reported by an external edge detector or background.

use crate::util::{HoughError, HoughResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Rectangular sub-area of the source image being analyzed.
///
/// `origin_x`/`origin_y` translate region-local coordinates back to image
/// coordinates when results are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchRegion {
    /// X coordinate of the region origin in the source image.
    pub origin_x: i32,
    /// Y coordinate of the region origin in the source image.
    pub origin_y: i32,
    /// Region width in pixels.
    pub width: usize,
    /// Region height in pixels.
    pub height: usize,
}

impl SearchRegion {
    /// Creates a region with an explicit origin.
    pub fn new(origin_x: i32, origin_y: i32, width: usize, height: usize) -> HoughResult<Self> {
        if width == 0 || height == 0 {
            return Err(HoughError::InvalidDimensions { width, height });
        }
        Ok(Self {
            origin_x,
            origin_y,
            width,
            height,
        })
    }

    /// Creates a region covering a whole image of the given size.
    pub fn full(width: usize, height: usize) -> HoughResult<Self> {
        Self::new(0, 0, width, height)
    }
}

/// Owned binary grid marking edge pixels within a search region.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    data: Vec<bool>,
    width: usize,
    height: usize,
}

impl EdgeMap {
    /// Creates an all-background map of the given size.
    pub fn new(width: usize, height: usize) -> HoughResult<Self> {
        let needed = required_len(width, height)?;
        Ok(Self {
            data: vec![false; needed],
            width,
            height,
        })
    }

    /// Creates a map from a row-major boolean mask.
    pub fn from_mask(mut data: Vec<bool>, width: usize, height: usize) -> HoughResult<Self> {
        let needed = required_len(width, height)?;
        if data.len() < needed {
            return Err(HoughError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        data.truncate(needed);
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a map from a row-major grayscale buffer.
    ///
    /// Pixels strictly above `threshold` are edges, so a threshold of 0
    /// treats every nonzero pixel as an edge.
    pub fn from_gray(data: &[u8], width: usize, height: usize, threshold: u8) -> HoughResult<Self> {
        let needed = required_len(width, height)?;
        if data.len() < needed {
            return Err(HoughError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        let mask = data[..needed].iter().map(|&v| v > threshold).collect();
        Ok(Self {
            data: mask,
            width,
            height,
        })
    }

    /// Returns the map width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the map height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns whether `(x, y)` is an edge pixel; out of range reads as
    /// background.
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y * self.width + x]
    }

    /// Marks or clears an edge pixel; out of range is a no-op.
    pub fn set(&mut self, x: usize, y: usize, edge: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = edge;
    }

    /// Returns the number of edge pixels in the map.
    pub fn edge_count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }
}

fn required_len(width: usize, height: usize) -> HoughResult<usize> {
    if width == 0 || height == 0 {
        return Err(HoughError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(HoughError::InvalidDimensions { width, height })
}
