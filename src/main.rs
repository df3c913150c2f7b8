//! Luminaries - prints the sky report for every part of the book.

use anyhow::Context;
use luminaries::Book;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Reports go to stdout; diagnostics stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let book = Book::new().context("failed to observe the skies of the book")?;
    print!("{}", book.render());
    Ok(())
}
