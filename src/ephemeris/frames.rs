//! Vector helpers, spherical conversion, sidereal time and precession.
//!
//! Vectors are plain `[f64; 3]`. Unless noted, frames are ecliptic and
//! units are whatever the caller supplied (AU or km).

use std::f64::consts::TAU;

use crate::types::{DEG_TO_RAD, J2000_JD, OBLIQUITY_J2000_DEG, RAD_TO_DEG};

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin, in the input units.
    pub distance: f64,
}

pub fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(a: &[f64; 3], k: f64) -> [f64; 3] {
    [a[0] * k, a[1] * k, a[2] * k]
}

pub fn norm(a: &[f64; 3]) -> f64 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// Longitude is measured in the x-y plane from +x toward +y.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let r = norm(xyz);
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    let lon = xyz[1].atan2(xyz[0]).rem_euclid(TAU);
    let lat = (xyz[2] / r).asin();

    SphericalCoords {
        lon_deg: lon * RAD_TO_DEG,
        lat_deg: lat * RAD_TO_DEG,
        distance: r,
    }
}

/// Inverse of [`cartesian_to_spherical`].
pub fn spherical_to_cartesian(lon_deg: f64, lat_deg: f64, distance: f64) -> [f64; 3] {
    let (sin_lon, cos_lon) = (lon_deg * DEG_TO_RAD).sin_cos();
    let (sin_lat, cos_lat) = (lat_deg * DEG_TO_RAD).sin_cos();
    [
        distance * cos_lat * cos_lon,
        distance * cos_lat * sin_lon,
        distance * sin_lat,
    ]
}

/// Rotate an equatorial vector into the ecliptic frame (about +x by ε).
pub fn equatorial_to_ecliptic(v: &[f64; 3]) -> [f64; 3] {
    let (sin_e, cos_e) = (OBLIQUITY_J2000_DEG * DEG_TO_RAD).sin_cos();
    [v[0], v[1] * cos_e + v[2] * sin_e, -v[1] * sin_e + v[2] * cos_e]
}

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// Earth rotation angle plus the Capitaine et al. (2003) polynomial,
/// truncated after the quadratic term. UT1 is taken as UTC.
pub fn gmst_deg(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let era = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    let t = du / 36525.0;
    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t * t;
    (era * RAD_TO_DEG + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// General precession in ecliptic longitude (IAU 2006), degrees, for `t`
/// Julian centuries from J2000. Negative before J2000.
pub fn general_precession_deg(t: f64) -> f64 {
    (5028.796195 * t + 1.1054348 * t * t) / 3600.0
}

/// Angle between two directions in degrees, range [0, 180].
pub fn angle_between_deg(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let denom = norm(a) * norm(b);
    if denom == 0.0 {
        return 0.0;
    }
    let cos = (a[0] * b[0] + a[1] * b[1] + a[2] * b[2]) / denom;
    cos.clamp(-1.0, 1.0).acos() * RAD_TO_DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_spherical_round_trip() {
        let v = spherical_to_cartesian(250.0, -4.5, 2.0);
        let s = cartesian_to_spherical(&v);
        assert_relative_eq!(s.lon_deg, 250.0, epsilon = 1e-10);
        assert_relative_eq!(s.lat_deg, -4.5, epsilon = 1e-10);
        assert_relative_eq!(s.distance, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vector() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance, 0.0);
    }

    #[test]
    fn test_celestial_pole_maps_to_ecliptic_latitude() {
        let pole = equatorial_to_ecliptic(&[0.0, 0.0, 1.0]);
        let s = cartesian_to_spherical(&pole);
        assert_relative_eq!(s.lat_deg, 90.0 - OBLIQUITY_J2000_DEG, epsilon = 1e-9);
        assert_relative_eq!(s.lon_deg, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gmst_at_j2000() {
        // GMST at 2000-01-01 12:00 UT1 is 18h 41m 50.55s = 280.4606°
        assert_relative_eq!(gmst_deg(J2000_JD), 280.4606, epsilon = 1e-3);
    }

    #[test]
    fn test_precession_rate() {
        // ~50.3″ per year
        assert_relative_eq!(general_precession_deg(0.01) * 3600.0, 50.29, epsilon = 0.05);
        assert!(general_precession_deg(-1.34) < 0.0);
    }

    #[test]
    fn test_angle_between() {
        assert_relative_eq!(
            angle_between_deg(&[1.0, 0.0, 0.0], &[0.0, 2.0, 0.0]),
            90.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            angle_between_deg(&[1.0, 0.0, 0.0], &[-3.0, 0.0, 0.0]),
            180.0,
            epsilon = 1e-12
        );
    }
}
