//! Currency conversion between caller-facing prices and stored cents

/// Minor units per major unit (cents per dollar)
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Convert a major-unit price (e.g. `99.5` dollars) to stored minor units
/// (`9950` cents), rounding to the nearest cent.
///
/// ```
/// use lightbnb_db::models::to_minor_units;
///
/// assert_eq!(to_minor_units(100.0), 10_000);
/// ```
pub fn to_minor_units(major: f64) -> i64 {
    (major * MINOR_UNITS_PER_MAJOR as f64).round() as i64
}
