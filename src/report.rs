//! Plain-text sky report for a part.
//!
//! ```text
//! Part 1: A Sphere within a Sphere (1866-01-27)
//! Sky over Wellington (45.8667°S, 170.5000°E), Moon 14 days old
//!   Mercury
//!     phase: 87%
//!     magnitude: -0.52
//!     constellation: Capricornus ♑ (Earth)
//!     pairing: Walter Moody with Quee Long
//!   ...
//! ```

use std::fmt;

use crate::book::Part;
use crate::sky::BodyObservation;

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sky = self.sky();
        writeln!(
            f,
            "Part {}: {} ({})",
            self.number(),
            self.title(),
            self.date().format("%Y-%m-%d")
        )?;
        writeln!(
            f,
            "Sky over {} ({}), Moon {} days old",
            sky.location().name,
            sky.location().coordinates(),
            sky.moon_age_days()
        )?;
        for observation in sky.observations() {
            write_observation(f, observation)?;
        }
        Ok(())
    }
}

/// Render `part` as a header followed by one block per body.
pub fn render_part(part: &Part) -> String {
    part.to_string()
}

fn write_observation(f: &mut fmt::Formatter<'_>, obs: &BodyObservation) -> fmt::Result {
    writeln!(f, "  {}", obs.body)?;
    writeln!(f, "    phase: {}%", obs.phase)?;
    writeln!(f, "    magnitude: {:.2}", obs.magnitude)?;
    writeln!(
        f,
        "    constellation: {} ({})",
        obs.constellation, obs.constellation.element
    )?;
    writeln!(
        f,
        "    pairing: {} with {}",
        obs.character(),
        obs.constellation.character
    )
}
