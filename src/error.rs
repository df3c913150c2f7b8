//! Errors surfaced while building and querying the book.

use crate::ephemeris::{Body, EphemerisError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LuminariesError {
    #[error("book doesn't have a part number {key} (parts are numbered 1 to {count})")]
    InvalidPartIndex { key: String, count: usize },

    #[error("unknown constellation: {0}")]
    UnknownConstellation(String),

    #[error("{body} reported a phase of {phase}%, outside 0 to 100")]
    PhaseOutOfRange { body: Body, phase: f64 },

    #[error("part number {number} appears more than once in the part table")]
    DuplicatePart { number: u8 },

    #[error("part {number} has an invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        number: u8,
        year: i32,
        month: u32,
        day: u32,
    },

    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
