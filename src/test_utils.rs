//! Test utilities for sky and book tests.
//!
//! Provides a scripted ephemeris with fixed answers per body so that tests
//! do not depend on the analytic ephemeris.

/// Fixtures for building skies from known answers.
pub mod fixtures {
    use std::collections::HashMap;

    use chrono::NaiveDate;

    use crate::ephemeris::{Body, Ephemeris, EphemerisError, RawObservation};
    use crate::types::Location;

    /// Date of the first part.
    pub fn scripted_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1866, 1, 27).unwrap()
    }

    /// An ephemeris that returns the same answer for a body on every date.
    #[derive(Clone, Debug)]
    pub struct ScriptedEphemeris {
        answers: HashMap<Body, RawObservation>,
        failing: Option<Body>,
    }

    impl Default for ScriptedEphemeris {
        fn default() -> Self {
            let answers = [
                (Body::Mercury, -0.52, 87.4, "Capricornus", 305.0),
                (Body::Venus, -3.91, 98.2, "Sagittarius", 280.0),
                (Body::Mars, 1.37, 95.6, "Ophiuchus", 255.0),
                (Body::Jupiter, -1.81, 99.9, "Scorpius", 244.0),
                (Body::Saturn, 0.71, 99.8, "Libra", 220.0),
                (Body::Moon, -12.02, 73.5, "Cancer", 125.0),
                (Body::Sun, -26.75, 100.0, "Capricornus", 308.0),
            ]
            .into_iter()
            .map(|(body, magnitude, phase, name, lon)| {
                (
                    body,
                    RawObservation {
                        magnitude,
                        phase,
                        constellation: name.to_string(),
                        ecliptic_longitude: lon,
                    },
                )
            })
            .collect();

            Self {
                answers,
                failing: None,
            }
        }
    }

    impl ScriptedEphemeris {
        fn answer_mut(&mut self, body: Body) -> &mut RawObservation {
            self.answers
                .get_mut(&body)
                .expect("every body has a scripted answer")
        }

        pub fn with_phase(mut self, body: Body, phase: f64) -> Self {
            self.answer_mut(body).phase = phase;
            self
        }

        pub fn with_constellation(mut self, body: Body, name: &str) -> Self {
            self.answer_mut(body).constellation = name.to_string();
            self
        }

        pub fn with_longitude(mut self, body: Body, lon: f64) -> Self {
            self.answer_mut(body).ecliptic_longitude = lon;
            self
        }

        /// Make every query for `body` fail.
        pub fn failing_on(mut self, body: Body) -> Self {
            self.failing = Some(body);
            self
        }
    }

    impl Ephemeris for ScriptedEphemeris {
        fn observe(
            &self,
            body: Body,
            date: NaiveDate,
            _location: &Location,
        ) -> Result<RawObservation, EphemerisError> {
            if self.failing == Some(body) {
                return Err(EphemerisError::NonFinite {
                    body,
                    date,
                    quantity: "magnitude",
                });
            }
            Ok(self.answers[&body].clone())
        }
    }
}
