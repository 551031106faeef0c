use anyhow::{Context, Result};
use quotepick::v1::{QuoteBook, pick_and_print};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tracing::info;

pub fn run(seed: Option<u64>, json: bool, pretty: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pick_to(&QuoteBook::builtin(), seed, json, pretty, &mut out)
}

fn pick_to<W: Write>(
    book: &QuoteBook,
    seed: Option<u64>,
    json: bool,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded generator");
            emit(book, &mut StdRng::seed_from_u64(seed), json, pretty, out)
        }
        None => emit(book, &mut rand::rng(), json, pretty, out),
    }
}

fn emit<R: rand::Rng, W: Write>(
    book: &QuoteBook,
    rng: &mut R,
    json: bool,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        let pick = book.pick(rng);
        writeln!(out, "{}", pick.to_json(pretty)?).context("Failed to write quote")?;
    } else {
        pick_and_print(book, rng, out).context("Failed to write quote")?;
    }
    Ok(())
}
