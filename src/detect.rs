//! Detector configuration, pipeline driver, and final results.
//!
//! `Detector` wires the voting pass and peak extraction together for one
//! run: validate the configuration against the region, allocate a fresh
//! accumulator, vote, extract, and translate candidates back to image
//! coordinates.

use crate::accum::Accumulator;
use crate::extract::extract_peaks;
use crate::grid::{EdgeMap, SearchRegion};
use crate::raster::RadiusBand;
use crate::util::{HoughError, HoughResult};
use crate::vote::cast_votes;
#[cfg(feature = "rayon")]
use crate::vote::cast_votes_par;

/// Detection parameters, validated once before any core call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorConfig {
    /// Smallest tested radius.
    pub radius_min: u32,
    /// Upper bound of the tested band (exclusive).
    pub radius_max: u32,
    /// Number of candidates to extract; extraction always returns exactly
    /// this many.
    pub max_circles: usize,
    /// Fraction of the region that is searched. Fixed at 1.0 in the current
    /// design; the field exists for future restriction.
    pub search_area_fraction: f64,
    /// Border strip skipped during peak scanning, as a fraction of the
    /// region width.
    pub scan_margin_fraction: f64,
    /// Use the row-parallel voting pass (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            radius_min: 10,
            radius_max: 20,
            max_circles: 2,
            search_area_fraction: 1.0,
            scan_margin_fraction: 0.01,
            parallel: false,
        }
    }
}

impl DetectorConfig {
    /// Returns the tested radius band.
    pub fn band(&self) -> RadiusBand {
        RadiusBand {
            radius_min: self.radius_min,
            radius_max: self.radius_max,
        }
    }

    /// Rejects configurations that would leave no valid voting area.
    pub fn validate(&self, region: &SearchRegion) -> HoughResult<()> {
        if self.radius_max == 0 || self.radius_min > self.radius_max {
            return Err(HoughError::InvalidRadiusBand {
                radius_min: self.radius_min,
                radius_max: self.radius_max,
            });
        }
        if !(self.search_area_fraction > 0.0 && self.search_area_fraction <= 1.0) {
            return Err(HoughError::InvalidSearchAreaFraction {
                fraction: self.search_area_fraction,
            });
        }
        let (width, height) = self.scaled_dims(region);
        let span = 2 * self.radius_max as usize;
        if width <= span || height <= span {
            return Err(HoughError::RegionTooSmall {
                width,
                height,
                radius_max: self.radius_max,
            });
        }
        Ok(())
    }

    fn scaled_dims(&self, region: &SearchRegion) -> (usize, usize) {
        let width = (region.width as f64 * self.search_area_fraction) as usize;
        let height = (region.height as f64 * self.search_area_fraction) as usize;
        (width, height)
    }
}

/// Circle reported in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Circle {
    /// Center x in image coordinates.
    pub x: i32,
    /// Center y in image coordinates.
    pub y: i32,
    /// Detected radius.
    pub radius: u32,
    /// Vote count at extraction time, for diagnostics.
    pub votes: u32,
}

impl Circle {
    /// Report line in the established consumer format.
    pub fn report_line(&self) -> String {
        format!(
            "Found circle (x, y, radius): ({}, {}, {})",
            self.x, self.y, self.radius
        )
    }

    /// Parametric boundary polyline for external rendering.
    pub fn polyline(&self, segments: usize) -> Vec<(i32, i32)> {
        circle_polyline(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.radius),
            segments,
        )
    }
}

/// Samples a circle boundary into `segments + 1` rounded integer vertices,
/// starting and ending at angle zero.
pub fn circle_polyline(cx: f64, cy: f64, radius: f64, segments: usize) -> Vec<(i32, i32)> {
    let start = ((cx + radius).round() as i32, cy.round() as i32);
    if segments == 0 {
        return vec![start];
    }
    let dtheta = std::f64::consts::TAU / segments as f64;
    let mut points = Vec::with_capacity(segments + 1);
    points.push(start);
    for i in 1..=segments {
        let theta = i as f64 * dtheta;
        points.push((
            (cx + radius * theta.cos()).round() as i32,
            (cy + radius * theta.sin()).round() as i32,
        ));
    }
    points
}

/// One-run circle detector over a binary edge map.
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Creates a detector with the given configuration.
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Runs voting and extraction over the edge map, returning circles in
    /// extraction order translated to image coordinates.
    ///
    /// The accumulator is created fresh per call and discarded afterwards,
    /// so repeated runs are independent and deterministic.
    pub fn detect(&self, edges: &EdgeMap, region: SearchRegion) -> HoughResult<Vec<Circle>> {
        self.config.validate(&region)?;
        if edges.width() != region.width || edges.height() != region.height {
            return Err(HoughError::RegionMismatch {
                edge_width: edges.width(),
                edge_height: edges.height(),
                region_width: region.width,
                region_height: region.height,
            });
        }

        let band = self.config.band();
        let (width, height) = self.config.scaled_dims(&region);
        let mut accumulator = Accumulator::new(width, height, band.count())?;

        #[cfg(feature = "rayon")]
        {
            if self.config.parallel {
                cast_votes_par(edges, &mut accumulator, band)?;
            } else {
                cast_votes(edges, &mut accumulator, band);
            }
        }
        #[cfg(not(feature = "rayon"))]
        cast_votes(edges, &mut accumulator, band);

        let candidates = extract_peaks(
            &mut accumulator,
            band.radius_max,
            self.config.max_circles,
            self.config.scan_margin_fraction,
        );

        Ok(candidates
            .into_iter()
            .map(|c| Circle {
                x: c.x as i32 + region.origin_x,
                y: c.y as i32 + region.origin_y,
                radius: band.radius_min + c.radius_offset as u32,
                votes: c.votes,
            })
            .collect())
    }
}
