//! Orbital elements and photometric data for the observed bodies.
//! Source: JPL "Keplerian Elements for Approximate Positions of the Major
//! Planets" (Standish), table 1, valid 1800 AD - 2050 AD.

use std::fmt;

use super::kepler::KeplerOrbit;

/// The bodies tracked in every sky.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Body {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Moon,
    Sun,
}

impl Body {
    /// Every body, in report order.
    pub const ALL: [Body; 7] = [
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Moon,
        Body::Sun,
    ];

    /// The planets propagated from Keplerian elements.
    pub const PLANETS: &'static [Body] = &[
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Moon => "Moon",
            Body::Sun => "Sun",
        }
    }

    /// Heliocentric orbit, for the planets only.
    pub fn orbit(&self) -> Option<KeplerOrbit> {
        let elements = match self {
            Body::Mercury => MERCURY,
            Body::Venus => VENUS,
            Body::Mars => MARS,
            Body::Jupiter => JUPITER,
            Body::Saturn => SATURN,
            Body::Moon | Body::Sun => return None,
        };
        Some(KeplerOrbit::from_elements(elements))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean orbital elements at J2000 and their rates per Julian century.
///
/// Angles in degrees, semi-major axis in AU. Each pair is `(value, rate)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: (f64, f64),
    pub eccentricity: (f64, f64),
    pub inclination: (f64, f64),
    pub mean_longitude: (f64, f64),
    pub longitude_of_perihelion: (f64, f64),
    pub longitude_of_ascending_node: (f64, f64),
}

pub const MERCURY: OrbitalElements = OrbitalElements {
    semi_major_axis: (0.38709927, 0.00000037),
    eccentricity: (0.20563593, 0.00001906),
    inclination: (7.00497902, -0.00594749),
    mean_longitude: (252.25032350, 149472.67411175),
    longitude_of_perihelion: (77.45779628, 0.16047689),
    longitude_of_ascending_node: (48.33076593, -0.12534081),
};

pub const VENUS: OrbitalElements = OrbitalElements {
    semi_major_axis: (0.72333566, 0.00000390),
    eccentricity: (0.00677672, -0.00004107),
    inclination: (3.39467605, -0.00078890),
    mean_longitude: (181.97909950, 58517.81538729),
    longitude_of_perihelion: (131.60246718, 0.00268329),
    longitude_of_ascending_node: (76.67984255, -0.27769418),
};

/// The Earth-Moon barycentre, used as the Earth's position.
pub const EARTH_MOON_BARYCENTRE: OrbitalElements = OrbitalElements {
    semi_major_axis: (1.00000261, 0.00000562),
    eccentricity: (0.01671123, -0.00004392),
    inclination: (-0.00001531, -0.01294668),
    mean_longitude: (100.46457166, 35999.37244981),
    longitude_of_perihelion: (102.93768193, 0.32327364),
    longitude_of_ascending_node: (0.0, 0.0),
};

pub const MARS: OrbitalElements = OrbitalElements {
    semi_major_axis: (1.52371034, 0.00001847),
    eccentricity: (0.09339410, 0.00007882),
    inclination: (1.84969142, -0.00813131),
    mean_longitude: (-4.55343205, 19140.30268499),
    longitude_of_perihelion: (-23.94362959, 0.44441088),
    longitude_of_ascending_node: (49.55953891, -0.29257343),
};

pub const JUPITER: OrbitalElements = OrbitalElements {
    semi_major_axis: (5.20288700, -0.00011607),
    eccentricity: (0.04838624, -0.00013253),
    inclination: (1.30439695, -0.00183714),
    mean_longitude: (34.39644051, 3034.74612775),
    longitude_of_perihelion: (14.72847983, 0.21252668),
    longitude_of_ascending_node: (100.47390909, 0.20469106),
};

pub const SATURN: OrbitalElements = OrbitalElements {
    semi_major_axis: (9.53667594, -0.00125060),
    eccentricity: (0.05386179, -0.00050991),
    inclination: (2.48599187, 0.00193609),
    mean_longitude: (49.95424423, 1222.49362201),
    longitude_of_perihelion: (92.59887831, -0.41897216),
    longitude_of_ascending_node: (113.66242448, -0.28867794),
};

/// Validity window of the element table as Julian Dates at 00:00 UTC,
/// 1800-01-01 to 2050-12-31 inclusive.
pub const ELEMENTS_VALID_JD: (f64, f64) = (2378496.5, 2470171.5);

/// Apparent magnitude of `body` at heliocentric distance `r` and geocentric
/// distance `delta` (both AU), seen at phase angle `phase_angle_deg`.
///
/// Planets follow the classical Astronomical Almanac laws (Saturn without the
/// ring term). The Moon uses the Allen phase law scaled to its mean distance.
pub fn apparent_magnitude(body: Body, r: f64, delta: f64, phase_angle_deg: f64) -> f64 {
    let i = phase_angle_deg;
    let distance_term = 5.0 * (r * delta).log10();
    match body {
        Body::Mercury => {
            -0.42 + distance_term + 0.0380 * i - 0.000273 * i * i + 0.000002 * i * i * i
        }
        Body::Venus => {
            -4.40 + distance_term + 0.0009 * i + 0.000239 * i * i - 0.00000065 * i * i * i
        }
        Body::Mars => -1.52 + distance_term + 0.016 * i,
        Body::Jupiter => -9.40 + distance_term + 0.005 * i,
        Body::Saturn => -8.88 + distance_term + 0.044 * i,
        Body::Moon => {
            // `delta` is in AU; the law is calibrated at 384400 km and 1 AU.
            let mean_distance_au = 384400.0 / crate::types::AU_TO_KM;
            -12.73
                + 0.026 * i.abs()
                + 4.0e-9 * i.powi(4)
                + 5.0 * (r * delta / mean_distance_au).log10()
        }
        Body::Sun => -26.74 + 5.0 * delta.log10(),
    }
}
