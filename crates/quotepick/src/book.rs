use std::io::Write;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{QuoteError, Result};
use crate::quote::{QUOTES, Quote};

/// An ordered, non-empty collection of quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

/// One draw from a [`QuoteBook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pick<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub quote: &'a Quote,
}

impl Pick<'_> {
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl QuoteBook {
    /// The ten built-in quotes.
    pub fn builtin() -> Self {
        Self {
            quotes: QUOTES.into_iter().map(Quote::from_static).collect(),
        }
    }

    /// Build a book from loaded quotes. An empty list is rejected.
    pub fn new(quotes: Vec<Quote>) -> Result<Self> {
        if quotes.is_empty() {
            return Err(QuoteError::EmptyInput);
        }
        Ok(Self { quotes })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Never true for a constructed book.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    /// Draw one quote, each index equally likely.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Pick<'_> {
        let index = rng.random_range(0..self.quotes.len());
        debug!(index, total = self.quotes.len(), "picked quote");
        Pick {
            index,
            quote: &self.quotes[index],
        }
    }

    /// Draw with the thread-local generator.
    pub fn pick_random(&self) -> Pick<'_> {
        self.pick(&mut rand::rng())
    }
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a QuoteBook {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

/// Draw one quote from `book` and write it to `out` as a single line.
pub fn pick_and_print<'b, R, W>(book: &'b QuoteBook, rng: &mut R, out: &mut W) -> Result<Pick<'b>>
where
    R: Rng + ?Sized,
    W: Write,
{
    let pick = book.pick(rng);
    writeln!(out, "{}", pick.quote)?;
    out.flush()?;
    Ok(pick)
}
