//! Ephemeris module for computing what each body looks like from the ground.
//!
//! The rest of the crate only sees the [`Ephemeris`] trait: given a body, a
//! date and a place, it answers with a magnitude, an illuminated percentage
//! and the name of the constellation the body sits in.
//!
//! [`KeplerEphemeris`] is the built-in answerer:
//! - Planets from JPL mean Keplerian elements (heliocentric, J2000 ecliptic).
//! - The Sun as the reflection of the Earth-Moon barycentre.
//! - The Moon from a truncated lunar series, corrected for the observer's
//!   parallax and precessed to J2000.
//!
//! Observations are taken at 00:00 UTC on the requested date.

pub mod constellation;
pub mod data;
pub mod frames;
pub mod kepler;
pub mod lunar;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::Body;

use chrono::NaiveDate;

use crate::types::{
    AU_TO_KM, EARTH_RADIUS_KM, Location, centuries_since_j2000, julian_day,
};
use data::{EARTH_MOON_BARYCENTRE, ELEMENTS_VALID_JD, apparent_magnitude};
use frames::{
    SphericalCoords, angle_between_deg, cartesian_to_spherical, equatorial_to_ecliptic,
    general_precession_deg, gmst_deg, norm, scale, spherical_to_cartesian, sub,
};
use kepler::KeplerOrbit;

/// One body as seen from one place at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct RawObservation {
    /// Apparent visual magnitude
    pub magnitude: f64,
    /// Illuminated fraction of the disk, in percent
    pub phase: f64,
    /// IAU constellation name; not necessarily one of the zodiac twelve
    pub constellation: String,
    /// Apparent ecliptic longitude in degrees (J2000)
    pub ecliptic_longitude: f64,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("date {date} outside the ephemeris range (1800-01-01 to 2050-12-31)")]
    OutOfRange { date: NaiveDate },

    #[error("non-finite {quantity} computed for {body} on {date}")]
    NonFinite {
        body: Body,
        date: NaiveDate,
        quantity: &'static str,
    },
}

/// Source of positional astronomy for the sky reports.
pub trait Ephemeris {
    fn observe(
        &self,
        body: Body,
        date: NaiveDate,
        location: &Location,
    ) -> Result<RawObservation, EphemerisError>;
}

/// Geocentric view of one body, before it is reduced to a [`RawObservation`].
struct Apparent {
    /// Position relative to the observer, AU, J2000 ecliptic
    position: SphericalCoords,
    magnitude: f64,
    phase: f64,
}

/// Analytic ephemeris built on mean Keplerian elements.
#[derive(Clone, Debug)]
pub struct KeplerEphemeris {
    earth: KeplerOrbit,
}

impl Default for KeplerEphemeris {
    fn default() -> Self {
        Self {
            earth: KeplerOrbit::from_elements(EARTH_MOON_BARYCENTRE),
        }
    }
}

impl KeplerEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    fn planet(&self, body: Body, orbit: &KeplerOrbit, t: f64) -> Apparent {
        let earth = self.earth.heliocentric_position(t);
        let helio = orbit.heliocentric_position(t);
        let geo = sub(&helio, &earth);

        // Phase angle: Sun-planet-Earth
        let phase_angle = angle_between_deg(&helio, &geo);
        let (r, delta) = (norm(&helio), norm(&geo));

        Apparent {
            position: cartesian_to_spherical(&geo),
            magnitude: apparent_magnitude(body, r, delta, phase_angle),
            phase: illuminated_percent(phase_angle),
        }
    }

    fn sun(&self, t: f64) -> Apparent {
        let geo = scale(&self.earth.heliocentric_position(t), -1.0);
        let distance = norm(&geo);
        Apparent {
            position: cartesian_to_spherical(&geo),
            magnitude: apparent_magnitude(Body::Sun, 0.0, distance, 0.0),
            phase: 100.0,
        }
    }

    fn moon(&self, jd: f64, t: f64, location: &Location) -> Apparent {
        let geocentric = lunar::moon_position(jd);
        let moon_km =
            spherical_to_cartesian(geocentric.lon_deg, geocentric.lat_deg, geocentric.distance_km);

        // Observer on the Earth's surface, equatorial frame, then ecliptic
        let local_sidereal = gmst_deg(jd) + location.longitude;
        let observer_km = equatorial_to_ecliptic(&spherical_to_cartesian(
            local_sidereal,
            location.latitude,
            EARTH_RADIUS_KM,
        ));
        let topocentric = cartesian_to_spherical(&sub(&moon_km, &observer_km));

        // Equinox of date to J2000
        let lon_j2000 = topocentric.lon_deg - general_precession_deg(t);
        let moon_au = spherical_to_cartesian(
            lon_j2000,
            topocentric.lat_deg,
            topocentric.distance / AU_TO_KM,
        );

        let sun_au = scale(&self.earth.heliocentric_position(t), -1.0);
        let moon_to_sun = sub(&sun_au, &moon_au);
        let moon_to_earth = scale(&moon_au, -1.0);
        let phase_angle = angle_between_deg(&moon_to_sun, &moon_to_earth);
        let (r, delta) = (norm(&moon_to_sun), norm(&moon_au));

        Apparent {
            position: cartesian_to_spherical(&moon_au),
            magnitude: apparent_magnitude(Body::Moon, r, delta, phase_angle),
            phase: illuminated_percent(phase_angle),
        }
    }
}

impl Ephemeris for KeplerEphemeris {
    fn observe(
        &self,
        body: Body,
        date: NaiveDate,
        location: &Location,
    ) -> Result<RawObservation, EphemerisError> {
        let jd = julian_day(date);
        let (first, last) = ELEMENTS_VALID_JD;
        if !(first..=last).contains(&jd) {
            return Err(EphemerisError::OutOfRange { date });
        }
        let t = centuries_since_j2000(jd);

        let apparent = match (body, body.orbit()) {
            (_, Some(orbit)) => self.planet(body, &orbit, t),
            (Body::Moon, None) => self.moon(jd, t, location),
            (_, None) => self.sun(t),
        };

        let non_finite = |quantity| EphemerisError::NonFinite {
            body,
            date,
            quantity,
        };
        if !apparent.magnitude.is_finite() {
            return Err(non_finite("magnitude"));
        }
        if !apparent.phase.is_finite() {
            return Err(non_finite("phase"));
        }
        let SphericalCoords {
            lon_deg, lat_deg, ..
        } = apparent.position;
        if !lon_deg.is_finite() || !lat_deg.is_finite() {
            return Err(non_finite("position"));
        }

        Ok(RawObservation {
            magnitude: apparent.magnitude,
            phase: apparent.phase,
            constellation: constellation::constellation_at(lon_deg, lat_deg).to_string(),
            ecliptic_longitude: lon_deg,
        })
    }
}

/// Illuminated percentage of a disk seen at `phase_angle_deg`.
pub fn illuminated_percent(phase_angle_deg: f64) -> f64 {
    let cos_i = phase_angle_deg.to_radians().cos();
    (50.0 * (1.0 + cos_i)).clamp(0.0, 100.0)
}
