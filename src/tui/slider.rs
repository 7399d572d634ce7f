//! Drag-to-value mapping for the progress slider.
//!
//! The contract is expressed in the mockup's logical units: a 250-unit track
//! with a 20-unit thumb. A drag reports the horizontal displacement since
//! gesture start; the displacement is clamped to the thumb's travel range and
//! mapped linearly onto the value range on every move event. Terminal mouse
//! drags are scaled from cells into track units before entering the contract.

/// Track length in logical units.
pub const TRACK_UNITS: f64 = 250.0;
/// Thumb size in logical units.
pub const THUMB_UNITS: f64 = 20.0;
/// Maximum thumb travel along the track.
pub const MAX_TRAVEL: f64 = TRACK_UNITS - THUMB_UNITS;

/// Value reported for a drag displacement. The displacement is clamped to
/// `[0, MAX_TRAVEL]`, scaled onto `[min, max]`, and rounded to the nearest
/// integer, so the result always lies within the value range.
pub fn value_for_displacement(displacement: f64, min: i32, max: i32) -> i32 {
    let clamped = displacement.clamp(0.0, MAX_TRAVEL);
    let value = clamped / MAX_TRAVEL * (max - min) as f64 + min as f64;
    value.round() as i32
}

/// Thumb offset along the track for a value; the inverse of
/// [`value_for_displacement`] up to rounding.
pub fn thumb_position(value: i32, min: i32, max: i32) -> f64 {
    (value - min) as f64 / (max - min) as f64 * MAX_TRAVEL
}

/// An in-flight horizontal drag on the rendered slider track.
#[derive(Debug, Clone, Copy)]
pub struct SliderDrag {
    /// Terminal column where the gesture started.
    pub origin_col: u16,
    /// Rendered track width in terminal cells.
    pub track_cells: u16,
}

impl SliderDrag {
    /// Displacement in track units for the pointer's current column.
    /// Dragging across the full rendered track sweeps the full travel range;
    /// movement left of the origin yields a negative displacement, which the
    /// value mapping then clamps.
    pub fn displacement(&self, col: u16) -> f64 {
        let dx = col as f64 - self.origin_col as f64;
        let span = self.track_cells.saturating_sub(1).max(1) as f64;
        dx / span * MAX_TRAVEL
    }
}
