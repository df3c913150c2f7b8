//! The twelve parts of the book and the skies over them.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::ephemeris::{Ephemeris, KeplerEphemeris};
use crate::error::LuminariesError;
use crate::report;
use crate::sky::SkySnapshot;
use crate::types::OBSERVATORY;

/// One row of the part table: number, title and `(year, month, day)`.
pub type PartEntry = (u8, &'static str, (i32, u32, u32));

/// Every part of the book.
pub const PARTS: [PartEntry; 12] = [
    (1, "A Sphere within a Sphere", (1866, 1, 27)),
    (2, "Auguries", (1866, 2, 18)),
    (3, "The House of Self-undoing", (1866, 3, 20)),
    (4, "Paenga-wha-wha", (1866, 4, 27)),
    (5, "Weight and Lucre", (1865, 5, 12)),
    (6, "The Widow and the Weeds", (1865, 6, 18)),
    (7, "Domicile", (1865, 7, 28)),
    (8, "The Truth About Aurora", (1865, 8, 22)),
    (9, "Mutable Earth", (1866, 9, 20)),
    (10, "Masters of Succession", (1866, 11, 11)),
    (11, "Orion Sets When Scorpio Rises", (1865, 12, 3)),
    (12, "The Old Moon in the Young Moon's Arms", (1866, 1, 14)),
];

/// A part of the book with the sky on its date.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    number: u8,
    title: String,
    date: NaiveDate,
    sky: SkySnapshot,
}

impl Part {
    /// Build a part, observing its sky from [`OBSERVATORY`].
    pub fn new<E: Ephemeris + ?Sized>(
        ephemeris: &E,
        number: u8,
        title: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, LuminariesError> {
        let sky = SkySnapshot::build(ephemeris, date, &OBSERVATORY)?;
        Ok(Self {
            number,
            title: title.into(),
            date,
            sky,
        })
    }

    fn from_entry<E: Ephemeris + ?Sized>(
        ephemeris: &E,
        &(number, title, (year, month, day)): &PartEntry,
    ) -> Result<Self, LuminariesError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(
            LuminariesError::InvalidDate {
                number,
                year,
                month,
                day,
            },
        )?;
        debug!(number, title, %date, "building part");
        Self::new(ephemeris, number, title, date)
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sky(&self) -> &SkySnapshot {
        &self.sky
    }

    /// Text report for this part.
    pub fn render(&self) -> String {
        report::render_part(self)
    }
}

/// All parts, ordered by number.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    parts: Vec<Part>,
}

impl Book {
    /// Build every part with the analytic ephemeris.
    pub fn new() -> Result<Self, LuminariesError> {
        Self::with_ephemeris(&KeplerEphemeris::new())
    }

    /// Build every part from [`PARTS`] with the given ephemeris.
    pub fn with_ephemeris<E: Ephemeris + ?Sized>(ephemeris: &E) -> Result<Self, LuminariesError> {
        Self::from_entries(ephemeris, &PARTS)
    }

    /// Build a book from an arbitrary part table.
    pub fn from_entries<E: Ephemeris + ?Sized>(
        ephemeris: &E,
        entries: &[PartEntry],
    ) -> Result<Self, LuminariesError> {
        info!(parts = entries.len(), "building book");
        let mut entries = entries.to_vec();
        entries.sort_by_key(|&(number, _, _)| number);
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(LuminariesError::DuplicatePart { number: pair[0].0 });
        }

        let parts = entries
            .iter()
            .map(|entry| Part::from_entry(ephemeris, entry))
            .collect::<Result<Vec<_>, _>>()?;

        info!(parts = parts.len(), "book ready");
        Ok(Self { parts })
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The part whose declared number is `number`.
    pub fn part(&self, number: i64) -> Result<&Part, LuminariesError> {
        self.parts
            .iter()
            .find(|part| i64::from(part.number) == number)
            .ok_or_else(|| LuminariesError::InvalidPartIndex {
                key: number.to_string(),
                count: self.parts.len(),
            })
    }

    /// Look a part up by a textual key, which must be an integer.
    pub fn lookup(&self, key: &str) -> Result<&Part, LuminariesError> {
        let number = key
            .trim()
            .parse::<i64>()
            .map_err(|_| LuminariesError::InvalidPartIndex {
                key: key.to_string(),
                count: self.parts.len(),
            })?;
        self.part(number)
    }

    /// Reports for every part, separated by blank lines.
    pub fn render(&self) -> String {
        self.parts
            .iter()
            .map(Part::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
