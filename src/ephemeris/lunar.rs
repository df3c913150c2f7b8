//! Low-precision geocentric Moon position.
//!
//! Principal terms of the lunar theory (Meeus ch. 47, truncated). Good to
//! roughly a quarter degree in longitude, which is all a constellation lookup
//! needs.

use crate::types::{DEG_TO_RAD, J2000_JD};

/// Geocentric ecliptic coordinates of the Moon, equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_km: f64,
}

/// Geocentric Moon position at Julian Date `jd`.
pub fn moon_position(jd: f64) -> LunarPosition {
    let d = jd - J2000_JD;

    let mean_longitude = 218.316 + 13.176396 * d;
    let moon_anomaly = (134.963 + 13.064993 * d) * DEG_TO_RAD;
    let sun_anomaly = (357.529 + 0.98560028 * d) * DEG_TO_RAD;
    let elongation = (297.850 + 12.190749 * d) * DEG_TO_RAD;
    let latitude_arg = (93.272 + 13.229350 * d) * DEG_TO_RAD;

    let lon = mean_longitude
        + 6.289 * moon_anomaly.sin()
        + 1.274 * (2.0 * elongation - moon_anomaly).sin()
        + 0.658 * (2.0 * elongation).sin()
        + 0.214 * (2.0 * moon_anomaly).sin()
        - 0.186 * sun_anomaly.sin()
        - 0.114 * (2.0 * latitude_arg).sin();

    let lat = 5.128 * latitude_arg.sin()
        + 0.281 * (moon_anomaly + latitude_arg).sin()
        + 0.278 * (moon_anomaly - latitude_arg).sin()
        + 0.173 * (2.0 * elongation - latitude_arg).sin();

    let distance_km = 385001.0
        - 20905.0 * moon_anomaly.cos()
        - 3699.0 * (2.0 * elongation - moon_anomaly).cos()
        - 2956.0 * (2.0 * elongation).cos();

    LunarPosition {
        lon_deg: lon.rem_euclid(360.0),
        lat_deg: lat,
        distance_km,
    }
}
