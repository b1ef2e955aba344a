//! Dense 3D vote accumulator.
//!
//! Cells are addressed by `(x, y, p)` where `p` is the radius-offset index.
//! The layout keeps the radius axis innermost so one `(x, y)` column is a
//! contiguous slice, matching the scan order of peak extraction.
//!
//! All mutating entry points are total: coordinates outside the grid on
//! either side are silently ignored, so rasterized circles that step past
//! the margin can never index out of range.

use crate::util::{HoughError, HoughResult};

/// Zero-initialized 3D counter grid owning all vote state for one run.
pub struct Accumulator {
    cells: Vec<u32>,
    width: usize,
    height: usize,
    radius_count: usize,
}

impl Accumulator {
    /// Allocates a zero-filled grid of `width * height * radius_count`
    /// cells.
    ///
    /// Size arithmetic is checked and the allocation is fallible, so an
    /// oversized request surfaces as an error instead of aborting mid-run.
    pub fn new(width: usize, height: usize, radius_count: usize) -> HoughResult<Self> {
        if width == 0 || height == 0 {
            return Err(HoughError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(radius_count))
            .ok_or(HoughError::AccumulatorAllocation {
                width,
                height,
                radius_count,
            })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| HoughError::AccumulatorAllocation {
                width,
                height,
                radius_count,
            })?;
        cells.resize(len, 0);
        Ok(Self {
            cells,
            width,
            height,
            radius_count,
        })
    }

    /// Returns the grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of radius planes.
    pub fn radius_count(&self) -> usize {
        self.radius_count
    }

    #[inline]
    fn index(&self, x: usize, y: usize, p: usize) -> usize {
        (x * self.height + y) * self.radius_count + p
    }

    /// Adds one vote at `(x, y, p)`; out-of-range coordinates are ignored.
    #[inline]
    pub fn increment(&mut self, x: i32, y: i32, p: i32) {
        if x < 0 || y < 0 || p < 0 {
            return;
        }
        let (x, y, p) = (x as usize, y as usize, p as usize);
        if x >= self.width || y >= self.height || p >= self.radius_count {
            return;
        }
        let idx = self.index(x, y, p);
        self.cells[idx] += 1;
    }

    /// Returns the vote count at `(x, y, p)` if the cell exists.
    pub fn get(&self, x: usize, y: usize, p: usize) -> Option<u32> {
        if x >= self.width || y >= self.height || p >= self.radius_count {
            return None;
        }
        Some(self.cells[self.index(x, y, p)])
    }

    /// Returns the contiguous radius column at `(x, y)`.
    pub fn radius_column(&self, x: usize, y: usize) -> Option<&[u32]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.index(x, y, 0);
        Some(&self.cells[start..start + self.radius_count])
    }

    /// Zeroes every cell whose `(x, y)` lies in the square window
    /// `[center_x - half, center_x + half) x [center_y - half, center_y +
    /// half)`, across all radius planes. The window is clipped to the grid.
    pub fn clear_region(&mut self, center_x: i32, center_y: i32, half: i32) {
        if half <= 0 {
            return;
        }
        let x_start = (center_x - half).max(0) as usize;
        let x_end = ((center_x + half).max(0) as usize).min(self.width);
        let y_start = (center_y - half).max(0) as usize;
        let y_end = ((center_y + half).max(0) as usize).min(self.height);

        for x in x_start..x_end {
            for y in y_start..y_end {
                let start = self.index(x, y, 0);
                self.cells[start..start + self.radius_count].fill(0);
            }
        }
    }

    /// Sum of all cells, for diagnostics and vote-conservation checks.
    pub fn total_votes(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Returns the raw cell buffer in `(x, y, p)` order.
    pub fn as_slice(&self) -> &[u32] {
        &self.cells
    }

    /// Adds the cells of another accumulator of identical dimensions.
    #[cfg(feature = "rayon")]
    pub(crate) fn merge_from(&mut self, other: &Accumulator) {
        debug_assert_eq!(
            (self.width, self.height, self.radius_count),
            (other.width, other.height, other.radius_count)
        );
        for (cell, &add) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell += add;
        }
    }
}
