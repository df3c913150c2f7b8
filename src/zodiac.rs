//! The twelve zodiac constellations and the characters they stand for.
//!
//! A body's apparent path also crosses a few constellations outside the
//! zodiac. Those are folded onto their neighbouring sign through
//! [`OVERRIDES`] before the table lookup.

use std::fmt;

use crate::error::LuminariesError;

/// Classical element of a sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A canonical zodiac sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Constellation {
    pub name: &'static str,
    pub symbol: char,
    pub element: Element,
    /// Character who takes this sign
    pub character: &'static str,
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.symbol)
    }
}

const fn sign(
    name: &'static str,
    symbol: char,
    element: Element,
    character: &'static str,
) -> Constellation {
    Constellation {
        name,
        symbol,
        element,
        character,
    }
}

/// The zodiac, in ecliptic order from Aries.
pub const ZODIAC: [Constellation; 12] = [
    sign("Aries", '♈', Element::Fire, "Te Rau Tauwhare"),
    sign("Taurus", '♉', Element::Earth, "Charlie Frost"),
    sign("Gemini", '♊', Element::Air, "Benjamin Löwenthal"),
    sign("Cancer", '♋', Element::Water, "Edgar Clinch"),
    sign("Leo", '♌', Element::Earth, "Dick Mannering"),
    sign("Virgo", '♍', Element::Earth, "Harald Nilssen"),
    sign("Libra", '♎', Element::Air, "Aubert Gascoigne"),
    sign("Scorpius", '♏', Element::Water, "Joseph Pritchard"),
    sign("Sagittarius", '♐', Element::Fire, "Thomas Balfour"),
    sign("Capricornus", '♑', Element::Earth, "Quee Long"),
    sign("Aquarius", '♒', Element::Air, "Cowell Devlin"),
    sign("Pisces", '♓', Element::Water, "Sook Yongsheng"),
];

/// Non-zodiac constellations and the sign each one counts as.
pub const OVERRIDES: [(&str, &str); 4] = [
    ("Ophiuchus", "Sagittarius"),
    ("Sextans", "Leo"),
    ("Cetus", "Pisces"),
    ("Orion", "Taurus"),
];

/// The sign name `raw` stands for, after overrides.
pub fn canonical_name(raw: &str) -> &str {
    OVERRIDES
        .iter()
        .find(|(minor, _)| *minor == raw)
        .map_or(raw, |&(_, sign)| sign)
}

/// Look up a canonical sign by name.
pub fn sign_named(name: &str) -> Option<&'static Constellation> {
    ZODIAC.iter().find(|c| c.name == name)
}

/// Resolve a constellation name reported by the ephemeris onto the zodiac.
///
/// Fails with [`LuminariesError::UnknownConstellation`] when the name is
/// neither a sign nor an override.
pub fn resolve(raw: &str) -> Result<Constellation, LuminariesError> {
    sign_named(canonical_name(raw))
        .copied()
        .ok_or_else(|| LuminariesError::UnknownConstellation(raw.to_string()))
}
