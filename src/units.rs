//! Conversions from native planning units to physical units for display.
//!
//! The engine plans entirely in the polygon's native coordinate units.
//! These helpers convert results for presentation, assuming the scale
//! factor is expressed in centimeters per native unit.

/// Square meters per tsubo, the traditional Japanese area unit.
pub const SQUARE_METERS_PER_TSUBO: f64 = 3.305_79;

/// Converts a native squared-unit area to square meters.
///
/// `cm_per_unit` is the linear scale factor (centimeters per native unit).
#[must_use]
pub fn area_to_square_meters(native_area: f64, cm_per_unit: f64) -> f64 {
    native_area * cm_per_unit * cm_per_unit / 10_000.0
}

/// Converts an area in square meters to tsubo.
#[must_use]
pub fn square_meters_to_tsubo(area_m2: f64) -> f64 {
    area_m2 / SQUARE_METERS_PER_TSUBO
}

/// Converts a native-unit distance to meters.
///
/// `cm_per_unit` is the linear scale factor (centimeters per native unit).
#[must_use]
pub fn distance_to_meters(native_distance: f64, cm_per_unit: f64) -> f64 {
    native_distance * cm_per_unit / 100.0
}
