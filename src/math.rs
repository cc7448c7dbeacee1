//! Mathematical utilities for ephemeris and screen mapping.

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Degrees to radians factor.
pub const RAD: f64 = PI / 180.0;

/// Scale of the sky plane produced by [`sph2cart`].
pub const SKY_RADIUS: f64 = 180.0;

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Point on the sky plane, both components in `[-SKY_RADIUS, SKY_RADIUS]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPoint {
    /// East/west component.
    pub x: f64,
    /// North/south component.
    pub y: f64,
}

/// Flattens an (azimuth, altitude) pair onto the sky plane.
///
/// `x = 180 cos(alt) sin(az)`, `y = 180 cos(alt) cos(az)`. This is not a
/// proper spherical projection; the on-screen calibration (horizon height,
/// sunrise line) depends on this exact form.
#[must_use]
pub fn sph2cart(azimuth: f64, altitude: f64) -> SkyPoint {
    SkyPoint {
        x: SKY_RADIUS * altitude.cos() * azimuth.sin(),
        y: SKY_RADIUS * altitude.cos() * azimuth.cos(),
    }
}

/// Linearly maps `value` from `domain` onto `range`.
///
/// Ranges may be decreasing. Both endpoints map exactly: the domain start
/// yields `range.0` and the domain end yields `range.1`.
#[must_use]
pub fn map_range(domain: (f64, f64), range: (f64, f64), value: f64) -> f64 {
    if value == domain.1 {
        return range.1;
    }
    range.0 + (value - domain.0) * (range.1 - range.0) / (domain.1 - domain.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((RAD * 180.0 - PI).abs() < EPSILON);
        assert!((RAD * 90.0 - PI / 2.0).abs() < EPSILON);

        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
    }

    #[test]
    fn test_sph2cart_axes() {
        // Due south on the horizon.
        let p = sph2cart(0.0, 0.0);
        assert!((p.x).abs() < EPSILON);
        assert!((p.y - 180.0).abs() < EPSILON);

        // West on the horizon.
        let p = sph2cart(PI / 2.0, 0.0);
        assert!((p.x - 180.0).abs() < EPSILON);
        assert!((p.y).abs() < 1e-9);

        // Zenith collapses to the centre.
        let p = sph2cart(1.234, PI / 2.0);
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_map_range_endpoints_are_exact() {
        let ranges = [
            (1012.0, 25.0),
            (734.0, 25.0),
            (1011.5, 24.0),
            (0.1, 1e20),
            (-3.7, 12.9),
            (5.0, 5.0),
        ];
        for (w, d) in ranges {
            assert_eq!(map_range((-180.0, 180.0), (w, d), -180.0), w);
            assert_eq!(map_range((-180.0, 180.0), (w, d), 180.0), d);
        }
    }

    #[test]
    fn test_map_range_midpoint_and_direction() {
        assert_eq!(map_range((-180.0, 180.0), (1000.0, 0.0), 0.0), 500.0);
        // Decreasing range: larger input moves toward the smaller end.
        let a = map_range((-180.0, 180.0), (734.0, 25.0), -10.0);
        let b = map_range((-180.0, 180.0), (734.0, 25.0), 10.0);
        assert!(a > b);
    }
}
