//! Map zoom level for a circle radius.

/// Zoom level used when no sensible radius is available.
pub const FALLBACK_ZOOM_LEVEL: i32 = 11;

/// Returns a map zoom level at which a circle of `radius_meters` stays visible.
///
/// `round(16 - log2(radius * 1.5 / 500))`. Clamping to the map's supported
/// range is left to the host. Non-finite or non-positive radii yield
/// [`FALLBACK_ZOOM_LEVEL`].
///
/// # Examples
///
/// ```
/// use geofence_core::geometry::zoom_level_for_radius;
///
/// assert_eq!(zoom_level_for_radius(100.0), 18);
/// assert_eq!(zoom_level_for_radius(500.0), 15);
/// assert_eq!(zoom_level_for_radius(5_000.0), 12);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // log2 of a finite positive f64 is far inside i32.
pub fn zoom_level_for_radius(radius_meters: f64) -> i32 {
    if !radius_meters.is_finite() || radius_meters <= 0.0 {
        return FALLBACK_ZOOM_LEVEL;
    }
    let scale = (radius_meters * 1.5) / 500.0;
    (16.0 - scale.log2()).round() as i32
}
