//! Numeral conversion core
//!
//! Pure conversion and validation logic. Nothing in this module performs I/O,
//! parses free-form input, or logs; callers decide how to present results and errors.

pub mod converter;
pub mod symbols;

pub use converter::{Entries, NumeralConverter, NumeralEntry, RomanNumerals, SubtractivePair};
pub use symbols::{Symbol, SymbolTable};

/// Smallest value that has a numeral.
pub const MIN_VALUE: u32 = 1;

/// Largest value that has a numeral.
pub const MAX_VALUE: u32 = 3999;

/// Whether `value` lies in the representable range.
pub fn in_range(value: u64) -> bool {
    (u64::from(MIN_VALUE)..=u64::from(MAX_VALUE)).contains(&value)
}

#[cfg(test)]
mod converter_proptest;
