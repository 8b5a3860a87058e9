//! Circular arithmetic on ecliptic longitudes.
//!
//! Every angular comparison in the engine goes through this module. Plain
//! subtraction of longitudes is wrong near the 0°/360° boundary.

/// Degrees in a full circle
pub const FULL_CIRCLE: f64 = 360.0;

/// Degrees spanned by one zodiac sign
pub const SIGN_SPAN: f64 = 30.0;

/// Normalize degrees to [0, 360).
pub fn normalize(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(FULL_CIRCLE);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= FULL_CIRCLE {
        0.0
    } else {
        normalized
    }
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = normalize(a - b);
    diff.min(FULL_CIRCLE - diff)
}

/// Signed shortest delta from `b` to `a`, in (-180, 180].
///
/// Positive when `a` lies ahead of `b` in zodiacal order.
pub fn signed_delta(a: f64, b: f64) -> f64 {
    let diff = normalize(a - b);
    if diff > 180.0 {
        diff - FULL_CIRCLE
    } else {
        diff
    }
}

/// Zodiac sign index (0 = Aries .. 11 = Pisces) for a longitude.
pub fn sign_index(longitude: f64) -> u8 {
    let idx = (normalize(longitude) / SIGN_SPAN).floor() as u8;
    idx.min(11)
}

/// Degrees into the sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    let lon = normalize(longitude);
    lon - f64::from(sign_index(lon)) * SIGN_SPAN
}

/// Whether `longitude` lies in the half-open arc `[start, end)` walked in
/// increasing zodiacal order. Handles arcs that cross 0°.
pub fn in_arc(longitude: f64, start: f64, end: f64) -> bool {
    let lon = normalize(longitude);
    let start = normalize(start);
    let end = normalize(end);
    if start <= end {
        lon >= start && lon < end
    } else {
        lon >= start || lon < end
    }
}

/// Forward arc length from `start` to `end`, in [0, 360).
pub fn forward_arc(start: f64, end: f64) -> f64 {
    normalize(end - start)
}
