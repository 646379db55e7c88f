//! Conversion between integers and Roman numerals.
//!
//! The [`core`] module holds the converter and has no I/O. The remaining
//! modules make up the command line front end built on top of it.

pub mod core;
pub mod error;
pub mod logging;
pub mod menu;
pub mod session;
pub mod settings;

#[cfg(any(test, debug_assertions))]
pub mod test_utils;

pub use crate::core::{NumeralConverter, NumeralEntry, RomanNumerals};
pub use error::{NumeralError, Result};
