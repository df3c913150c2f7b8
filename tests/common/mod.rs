//! Common test utilities for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use luminaries::ephemeris::{Body, Ephemeris, EphemerisError, RawObservation};
use luminaries::types::Location;

/// Ephemeris that answers every query with the same values, varying only
/// the constellation per body.
pub struct FixedEphemeris {
    pub constellation: fn(Body) -> &'static str,
}

impl Default for FixedEphemeris {
    fn default() -> Self {
        Self {
            constellation: |body| match body {
                Body::Mercury => "Aquarius",
                Body::Venus => "Ophiuchus",
                Body::Mars => "Sextans",
                Body::Jupiter => "Gemini",
                Body::Saturn => "Virgo",
                Body::Moon => "Cetus",
                Body::Sun => "Capricornus",
            },
        }
    }
}

impl Ephemeris for FixedEphemeris {
    fn observe(
        &self,
        body: Body,
        _date: NaiveDate,
        _location: &Location,
    ) -> Result<RawObservation, EphemerisError> {
        Ok(RawObservation {
            magnitude: 1.25,
            phase: 50.5,
            constellation: (self.constellation)(body).to_string(),
            ecliptic_longitude: 0.0,
        })
    }
}

/// Split a rendered report into its body blocks (name line plus details).
pub fn body_blocks(report: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in report.lines().skip(2) {
        if line.starts_with("    ") {
            if let Some(block) = blocks.last_mut() {
                block.push(line);
            }
        } else if line.starts_with("  ") {
            blocks.push(vec![line]);
        }
    }
    blocks
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
