//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that the analytic ephemeris stays within physical
//! bounds across the whole validity window of the element tables.

use chrono::NaiveDate;
use proptest::prelude::*;
use std::f64::consts::TAU;

use super::constellation::constellation_at;
use super::kepler::KeplerOrbit;
use super::{Body, Ephemeris, KeplerEphemeris};
use crate::types::{Location, OBSERVATORY};
use crate::zodiac;

/// Days from 1800-01-01 to 2050-12-31.
const WINDOW_DAYS: i64 = 91676;

fn date_in_window(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(1800, 1, 1)
        .unwrap()
        .checked_add_signed(chrono::Duration::days(offset))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The solver should always converge and produce E such that M = E - e*sin(E).
    #[test]
    fn prop_kepler_solver_convergence(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.95,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;

        let e_anom = KeplerOrbit::solve_eccentric_anomaly(mean_anomaly, eccentricity);

        let m_check = e_anom - eccentricity * e_anom.sin();
        let m_normalized = mean_anomaly.rem_euclid(TAU);

        let error = (m_check - m_normalized).abs();
        prop_assert!(
            error < 1e-8,
            "Kepler solver failed: M={}, e={}, E={}, M_check={}, error={}",
            mean_anomaly, eccentricity, e_anom, m_check, error
        );
    }

    /// Phase is a percentage for every body on every supported date.
    #[test]
    fn prop_phase_is_percentage(
        offset in 0i64..WINDOW_DAYS,
        body_index in 0usize..7,
    ) {
        let body = Body::ALL[body_index];
        let date = date_in_window(offset);
        let obs = KeplerEphemeris::new().observe(body, date, &OBSERVATORY).unwrap();
        prop_assert!(
            (0.0..=100.0).contains(&obs.phase),
            "{} phase {} on {}", body, obs.phase, date
        );
        prop_assert!((0.0..360.0).contains(&obs.ecliptic_longitude));
    }

    /// Whatever the ephemeris reports, the zodiac can resolve it.
    #[test]
    fn prop_reported_constellation_resolves(
        offset in 0i64..WINDOW_DAYS,
        body_index in 0usize..7,
        latitude in -60.0f64..60.0,
        longitude in -180.0f64..180.0,
    ) {
        let body = Body::ALL[body_index];
        let location = Location { name: "anywhere", latitude, longitude };
        let obs = KeplerEphemeris::new()
            .observe(body, date_in_window(offset), &location)
            .unwrap();
        prop_assert!(zodiac::resolve(&obs.constellation).is_ok(), "{}", obs.constellation);
    }

    /// Every point in the band the bodies travel maps into the zodiac.
    #[test]
    fn prop_ecliptic_band_resolves(
        lon in 0.0f64..360.0,
        lat in -9.0f64..9.0,
    ) {
        let name = constellation_at(lon, lat);
        prop_assert!(zodiac::resolve(name).is_ok(), "{} at ({}, {})", name, lon, lat);
    }
}
