#![doc = include_str!("../README.md")]

mod book;
mod error;
mod quote;

pub mod v1 {
    //! Versioned public API for quotes and quote selection.
    //!
    //! - [`Quote`] — one quotation, `"<text> - <author>"`
    //! - [`QUOTES`] — the ten built-in quotations, in their fixed order
    //! - [`QuoteBook`] — a non-empty, ordered collection of quotes
    //! - [`Pick`] — the result of a draw: the index and the quote
    //! - [`pick_and_print`] — draw once and write the quote as one line
    //!
    //! # Example — always draw the first quote
    //!
    //! ```
    //! use quotepick::v1::*;
    //! use rand::RngCore;
    //!
    //! struct Zero;
    //! impl RngCore for Zero {
    //!     fn next_u32(&mut self) -> u32 { 0 }
    //!     fn next_u64(&mut self) -> u64 { 0 }
    //!     fn fill_bytes(&mut self, dst: &mut [u8]) { dst.fill(0) }
    //! }
    //!
    //! let book = QuoteBook::builtin();
    //! let mut out = Vec::new();
    //! let pick = pick_and_print(&book, &mut Zero, &mut out).unwrap();
    //! assert_eq!(pick.index, 0);
    //! assert_eq!(
    //!     String::from_utf8(out).unwrap(),
    //!     "The only way to do great work is to love what you do. - Steve Jobs\n"
    //! );
    //! ```
    pub use crate::book::{Pick, QuoteBook, pick_and_print};
    pub use crate::error::{QuoteError, Result};
    pub use crate::quote::{QUOTES, Quote, SEPARATOR};
}
