//! Shared constants, the observing location and calendar conversions.

use chrono::{Datelike, NaiveDate};

/// Astronomical unit in kilometres
pub const AU_TO_KM: f64 = 1.495978707e8;

/// Mean equatorial radius of the Earth in kilometres
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Julian Date of the J2000.0 epoch (January 1, 2000, 12:00 TT)
pub const J2000_JD: f64 = 2451545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Mean obliquity of the ecliptic at J2000 in degrees
pub const OBLIQUITY_J2000_DEG: f64 = 23.439291;

/// Mean synodic month in days
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// A fixed place on the Earth's surface, in decimal degrees.
///
/// Latitude is positive north, longitude positive east.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Format as `45.8667°S, 170.5000°E`.
    pub fn coordinates(&self) -> String {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        format!(
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// Where every sky in the book is observed from.
pub const OBSERVATORY: Location = Location {
    name: "Wellington",
    latitude: -45.8667,
    longitude: 170.5000,
};

/// Julian Date at 00:00 UTC on `date`.
pub fn julian_day(date: NaiveDate) -> f64 {
    // Proleptic Gregorian day 1 (0001-01-01) starts at JD 1721425.5
    1721424.5 + date.num_days_from_ce() as f64
}

/// Julian centuries elapsed since J2000 at the given Julian Date.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
