//! Kepler orbit solver using Newton's method for the Kepler equation.

use super::data::OrbitalElements;
use crate::types::DEG_TO_RAD;

/// Keplerian elements evaluated at one instant.
/// Angular values in radians, distances in AU.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OsculatingElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    /// Argument of perihelion
    pub argument_of_perihelion: f64,
    pub longitude_of_ascending_node: f64,
    pub mean_anomaly: f64,
}

/// A heliocentric orbit with linearly drifting mean elements.
#[derive(Clone, Debug)]
pub struct KeplerOrbit {
    elements: OrbitalElements,
}

impl KeplerOrbit {
    /// Create an orbit from J2000 mean elements and their century rates.
    pub fn from_elements(elements: OrbitalElements) -> Self {
        Self { elements }
    }

    /// Evaluate the mean elements `t` Julian centuries after J2000.
    pub fn elements_at(&self, t: f64) -> OsculatingElements {
        let at = |(value, rate): (f64, f64)| value + rate * t;
        let el = &self.elements;

        let mean_longitude = at(el.mean_longitude);
        let perihelion = at(el.longitude_of_perihelion);
        let node = at(el.longitude_of_ascending_node);

        OsculatingElements {
            semi_major_axis: at(el.semi_major_axis),
            eccentricity: at(el.eccentricity),
            inclination: at(el.inclination) * DEG_TO_RAD,
            argument_of_perihelion: (perihelion - node) * DEG_TO_RAD,
            longitude_of_ascending_node: node * DEG_TO_RAD,
            mean_anomaly: (mean_longitude - perihelion) * DEG_TO_RAD,
        }
    }

    /// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E
    /// using Newton's method.
    ///
    /// # Arguments
    /// * `mean_anomaly` - Mean anomaly M in radians
    /// * `eccentricity` - Orbital eccentricity, 0 ≤ e < 1
    ///
    /// # Returns
    /// Eccentric anomaly E in radians
    pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
        // Normalize mean anomaly to [0, 2π)
        let m = mean_anomaly.rem_euclid(std::f64::consts::TAU);

        // Initial guess: E = M for low eccentricity, π for high e
        let mut e_anomaly = if eccentricity < 0.8 {
            m
        } else {
            std::f64::consts::PI
        };

        for _ in 0..50 {
            // f(E) = E - e*sin(E) - M
            let f = e_anomaly - eccentricity * e_anomaly.sin() - m;
            // f'(E) = 1 - e*cos(E)
            let f_prime = 1.0 - eccentricity * e_anomaly.cos();

            let delta = f / f_prime;
            e_anomaly -= delta;

            if delta.abs() < 1e-12 {
                break;
            }
        }

        e_anomaly
    }

    /// Compute true anomaly from eccentric anomaly.
    pub fn eccentric_to_true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
        let e = eccentricity;
        let half_e = eccentric_anomaly / 2.0;

        // atan2 keeps the full quadrant range
        let y = (1.0 + e).sqrt() * half_e.sin();
        let x = (1.0 - e).sqrt() * half_e.cos();
        2.0 * y.atan2(x)
    }

    /// Heliocentric position in AU, J2000 ecliptic frame, `t` Julian
    /// centuries after J2000.
    pub fn heliocentric_position(&self, t: f64) -> [f64; 3] {
        let el = self.elements_at(t);

        let e_anomaly = Self::solve_eccentric_anomaly(el.mean_anomaly, el.eccentricity);
        let true_anomaly = Self::eccentric_to_true_anomaly(e_anomaly, el.eccentricity);
        let radius = el.semi_major_axis * (1.0 - el.eccentricity * e_anomaly.cos());

        // Argument of latitude, then rotate out of the orbital plane
        let u = true_anomaly + el.argument_of_perihelion;
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_node, cos_node) = el.longitude_of_ascending_node.sin_cos();
        let (sin_i, cos_i) = el.inclination.sin_cos();

        [
            radius * (cos_node * cos_u - sin_node * sin_u * cos_i),
            radius * (sin_node * cos_u + cos_node * sin_u * cos_i),
            radius * (sin_u * sin_i),
        ]
    }
}
