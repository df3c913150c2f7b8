//! Which character each body stands for.

use crate::ephemeris::Body;

/// Character assigned to `body`.
pub fn character(body: Body) -> &'static str {
    match body {
        Body::Mercury => "Walter Moody",
        Body::Venus => "Lydia Wells",
        Body::Mars => "Francis Carver",
        Body::Jupiter => "George Shepard",
        Body::Saturn => "Alistair Lauderback",
        Body::Moon => "Anna Wetherell",
        Body::Sun => "Emery Staines",
    }
}

/// `(body, character)` pairs in report order.
pub fn cast() -> impl Iterator<Item = (Body, &'static str)> {
    Body::ALL.into_iter().map(|body| (body, character(body)))
}
