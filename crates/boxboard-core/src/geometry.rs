//! Pure geometry helpers: canvas clamping, grid snapping, size floors.

use kurbo::{Point, Size};

/// Grid size for snapping (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Minimum element width/height in pixels.
pub const MIN_ELEMENT_SIZE: f64 = 40.0;

/// Keyboard nudge distance when grid snap is off.
pub const NUDGE_STEP: f64 = 5.0;

/// Default canvas extents in logical pixels.
pub const CANVAS_SIZE: Size = Size::new(800.0, 600.0);

/// Clamp a single-axis position so `[position, position + size]` stays inside
/// `[0, extent]`. The input is rounded first; model coordinates are always
/// whole pixels.
pub fn clamp_axis(position: f64, size: f64, extent: f64) -> f64 {
    position.round().min(extent - size).max(0.0)
}

/// Clamp a top-left position so the whole `size` box stays inside `canvas`.
pub fn clamp_position(position: Point, size: Size, canvas: Size) -> Point {
    Point::new(
        clamp_axis(position.x, size.width, canvas.width),
        clamp_axis(position.y, size.height, canvas.height),
    )
}

/// Snap a value to the nearest multiple of `unit` when `enabled`, otherwise
/// round it to a whole pixel.
///
/// Halfway values round up (`f64::round` is away-from-zero): 10.0 snaps to
/// 20.0 on a 20 px grid. This is an observable boundary behavior, so it must
/// stay consistent across every interaction path.
pub fn snap_value(value: f64, unit: f64, enabled: bool) -> f64 {
    if enabled {
        (value / unit).round() * unit
    } else {
        value.round()
    }
}

/// Apply the minimum-size floor to a proposed width or height.
pub fn floor_size(proposed: f64) -> f64 {
    proposed.round().max(MIN_ELEMENT_SIZE)
}
