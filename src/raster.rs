//! Midpoint circle rasterization used for casting votes.
//!
//! The rasterizer yields integer offsets on the boundary of a circle around
//! the origin; the voting pass translates them to a center and applies them
//! to the accumulator. Emission order and the duplicate points at the octant
//! seams (x == y) are part of the observable vote counts and must not change.

/// Inclusive-exclusive band of tested radii.
///
/// Radius offset `p` maps to the actual radius `radius_min + p`, for `p` in
/// `0..count()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadiusBand {
    /// Smallest tested radius.
    pub radius_min: u32,
    /// Upper bound of the band; `radius_max` itself is not tested.
    pub radius_max: u32,
}

impl RadiusBand {
    /// Number of tested radii (accumulator planes).
    pub fn count(&self) -> usize {
        self.radius_max.saturating_sub(self.radius_min) as usize
    }

    /// Actual radius for a radius-offset index.
    pub fn radius_at(&self, p: usize) -> u32 {
        self.radius_min + p as u32
    }
}

/// Emits the boundary offsets of a circle of the given radius around the
/// origin.
///
/// The four cardinal points come first, then eight symmetric points per
/// midpoint step until the first octant closes at `x >= y`.
pub fn for_each_circle_offset<F>(radius: i32, mut emit: F)
where
    F: FnMut(i32, i32),
{
    if radius < 0 {
        return;
    }

    let mut f = 1 - radius;
    let mut ddf_x = 0;
    let mut ddf_y = -2 * radius;
    let mut x = 0;
    let mut y = radius;

    emit(0, radius);
    emit(0, -radius);
    emit(radius, 0);
    emit(-radius, 0);

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x + 1;

        emit(x, y);
        emit(-x, y);
        emit(x, -y);
        emit(-x, -y);
        emit(y, x);
        emit(-y, x);
        emit(y, -x);
        emit(-y, -x);
    }
}

/// Collects the boundary offsets of a circle into a vector.
pub fn circle_offsets(radius: i32) -> Vec<(i32, i32)> {
    let mut offsets = Vec::new();
    for_each_circle_offset(radius, |dx, dy| offsets.push((dx, dy)));
    offsets
}

/// Precomputed boundary offsets for every radius in a band, indexed by
/// radius offset.
pub struct CircleTable {
    planes: Vec<Vec<(i32, i32)>>,
}

impl CircleTable {
    /// Rasterizes every radius in the band once up front.
    pub fn build(band: RadiusBand) -> Self {
        let mut planes = Vec::with_capacity(band.count());
        for p in 0..band.count() {
            planes.push(circle_offsets(band.radius_at(p) as i32));
        }
        Self { planes }
    }

    /// Number of radius planes in the table.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Returns true when the band is empty.
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Iterates the offset slices in radius-offset order.
    pub fn planes(&self) -> impl Iterator<Item = &[(i32, i32)]> {
        self.planes.iter().map(|plane| plane.as_slice())
    }
}
