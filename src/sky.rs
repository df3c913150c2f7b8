//! Observations of every body on one date.

use chrono::NaiveDate;
use tracing::debug;

use crate::characters;
use crate::ephemeris::{Body, Ephemeris};
use crate::error::LuminariesError;
use crate::types::{Location, SYNODIC_MONTH_DAYS};
use crate::zodiac::{self, Constellation};

/// One body on one date, reduced to what the report needs.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyObservation {
    pub body: Body,
    pub magnitude: f64,
    /// Illuminated percentage, truncated
    pub phase: u8,
    /// Apparent ecliptic longitude in degrees
    pub ecliptic_longitude: f64,
    pub constellation: Constellation,
}

impl BodyObservation {
    /// Query `ephemeris` for `body` and resolve its constellation.
    pub fn observe<E: Ephemeris + ?Sized>(
        ephemeris: &E,
        body: Body,
        date: NaiveDate,
        location: &Location,
    ) -> Result<Self, LuminariesError> {
        let raw = ephemeris.observe(body, date, location)?;

        if !(0.0..=100.0).contains(&raw.phase) {
            return Err(LuminariesError::PhaseOutOfRange {
                body,
                phase: raw.phase,
            });
        }
        let constellation = zodiac::resolve(&raw.constellation)?;

        debug!(
            %body,
            %date,
            magnitude = raw.magnitude,
            phase = raw.phase,
            reported = %raw.constellation,
            resolved = constellation.name,
            "observed body"
        );

        Ok(Self {
            body,
            magnitude: raw.magnitude,
            // In range, so truncation cannot wrap
            phase: raw.phase.trunc() as u8,
            ecliptic_longitude: raw.ecliptic_longitude,
            constellation,
        })
    }

    /// Character the body stands for.
    pub fn character(&self) -> &'static str {
        characters::character(self.body)
    }
}

/// The seven bodies as seen on one date from one place.
#[derive(Clone, Debug, PartialEq)]
pub struct SkySnapshot {
    date: NaiveDate,
    location: Location,
    observations: Vec<BodyObservation>,
}

impl SkySnapshot {
    /// Observe every body in [`Body::ALL`] order. The first failure aborts.
    pub fn build<E: Ephemeris + ?Sized>(
        ephemeris: &E,
        date: NaiveDate,
        location: &Location,
    ) -> Result<Self, LuminariesError> {
        let observations = Body::ALL
            .into_iter()
            .map(|body| BodyObservation::observe(ephemeris, body, date, location))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            date,
            location: *location,
            observations,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn observations(&self) -> &[BodyObservation] {
        &self.observations
    }

    pub fn get(&self, body: Body) -> Option<&BodyObservation> {
        self.observations.iter().find(|o| o.body == body)
    }

    /// `build` stores one observation per body in [`Body::ALL`] order, so the
    /// discriminant is the index.
    fn observation(&self, body: Body) -> &BodyObservation {
        &self.observations[body as usize]
    }

    /// Whole days since the last new moon, from the Moon-Sun elongation.
    pub fn moon_age_days(&self) -> u8 {
        let (moon, sun) = (self.observation(Body::Moon), self.observation(Body::Sun));
        let elongation = (moon.ecliptic_longitude - sun.ecliptic_longitude).rem_euclid(360.0);
        (elongation / 360.0 * SYNODIC_MONTH_DAYS).trunc() as u8
    }
}
