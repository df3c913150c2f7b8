//! Luminaries - skies over the parts of a novel
//!
//! For each part of the book, observes the seven classical luminaries on the
//! part's date and pairs every body, and the zodiac sign it stands in, with
//! the character it represents.

pub mod book;
pub mod characters;
pub mod ephemeris;
pub mod error;
pub mod report;
pub mod sky;
pub mod types;
pub mod zodiac;

pub use book::{Book, Part};
pub use error::LuminariesError;

#[cfg(test)]
pub mod test_utils;
