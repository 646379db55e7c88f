//! Bidirectional conversion between integers and Roman numerals.

use serde::Serialize;
use std::fmt;

use super::symbols::{Symbol, SymbolTable};
use super::{in_range, MAX_VALUE, MIN_VALUE};
use crate::error::{NumeralError, Result};

/// Operations a presentation layer needs from a numeral converter.
pub trait RomanNumerals: Send + Sync {
    fn int_to_numeral(&self, value: u32) -> Result<String>;

    fn numeral_to_int(&self, text: &str) -> Result<u32>;

    /// Total check; never fails, returns `false` for anything malformed.
    fn is_valid_numeral(&self, text: &str) -> bool;

    fn list_all(&self) -> Result<Vec<NumeralEntry>>;
}

/// One row of the full enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumeralEntry {
    pub value: u32,
    pub numeral: String,
}

/// A two-symbol form such as `IX`, where `prefix` is subtracted from `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtractivePair {
    pub prefix: Symbol,
    pub base: Symbol,
}

impl SubtractivePair {
    pub fn value(&self) -> u32 {
        self.base.value() - self.prefix.value()
    }
}

impl fmt::Display for SubtractivePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.base)
    }
}

/// Converter over the fixed base symbol table.
///
/// Holds no state besides the table, so one instance can be shared freely
/// between callers and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralConverter {
    table: SymbolTable,
}

impl NumeralConverter {
    pub const fn new() -> Self {
        Self {
            table: SymbolTable::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.table
    }

    /// Base symbol with the greatest value not exceeding `n`; `None` for zero.
    pub fn largest_fitting(&self, n: u32) -> Option<Symbol> {
        self.table.largest_fitting(n)
    }

    /// Subtractive pair that should open the numeral for `n`, if any.
    ///
    /// `delta` is the distance from `n` up to the next tabulated value. It has to
    /// be positive, smaller than `n`, and no larger than the tabulated value below `n`.
    /// Its magnitude selects the smallest prefix that could cover it (I, X or C),
    /// and that must not exceed the one prefix the base symbol accepts.
    pub fn subtractive_candidate(&self, n: u32) -> Option<SubtractivePair> {
        if n < 3 || n >= self.table.largest().value() {
            return None;
        }

        let base = self.table.smallest_covering(n)?;
        let floor = self.table.largest_fitting(n)?;
        let delta = base.value() - n;
        if delta == 0 || delta >= n || delta > floor.value() {
            return None;
        }

        let band = match delta {
            1 => Symbol::I,
            2..=10 => Symbol::X,
            11..=100 => Symbol::C,
            _ => return None,
        };
        let prefix = base.subtractive_prefix()?;
        if band.value() > prefix.value() {
            return None;
        }

        Some(SubtractivePair { prefix, base })
    }

    /// Lazy, restartable enumeration of every representable value in order.
    pub fn entries(&self) -> Entries {
        Entries {
            converter: *self,
            next: MIN_VALUE,
        }
    }

    /// Structural check that returns the parsed symbols when the text is well formed.
    fn parse(&self, text: &str) -> Option<Vec<Symbol>> {
        if text.is_empty() {
            return None;
        }

        let symbols = text
            .chars()
            .map(|c| self.table.lookup(c))
            .collect::<Option<Vec<_>>>()?;

        let mut run = 0;
        let mut previous = None;
        for &symbol in &symbols {
            run = if previous == Some(symbol) { run + 1 } else { 1 };
            if symbol.max_run().is_some_and(|max| run > max) {
                return None;
            }
            previous = Some(symbol);
        }

        // A smaller symbol may only stand before a larger one when it is I, X or C
        let ordered = symbols
            .windows(2)
            .all(|pair| pair[0].value() >= pair[1].value() || pair[0].is_subtractive());

        ordered.then_some(symbols)
    }

    /// Rejects generated output that the validator would not accept.
    fn ensure_well_formed(&self, value: u32, numeral: String) -> Result<String> {
        if self.is_valid_numeral(&numeral) {
            Ok(numeral)
        } else {
            Err(NumeralError::invalid_result(value.to_string(), numeral))
        }
    }
}

impl RomanNumerals for NumeralConverter {
    fn int_to_numeral(&self, value: u32) -> Result<String> {
        if !in_range(u64::from(value)) {
            return Err(NumeralError::invalid_input(value));
        }

        let mut numeral = String::new();
        let mut remaining = value;
        while remaining > 0 {
            if let Some(pair) = self.subtractive_candidate(remaining) {
                numeral.push(pair.prefix.as_char());
                numeral.push(pair.base.as_char());
                remaining -= pair.value();
            } else {
                let symbol = self.largest_fitting(remaining).ok_or_else(|| {
                    NumeralError::invalid_result(value.to_string(), numeral.clone())
                })?;
                numeral.push(symbol.as_char());
                remaining -= symbol.value();
            }
        }

        self.ensure_well_formed(value, numeral)
    }

    fn numeral_to_int(&self, text: &str) -> Result<u32> {
        let symbols = self
            .parse(text)
            .ok_or_else(|| NumeralError::invalid_numeral(text))?;

        let mut total: u64 = 0;
        let mut last: u64 = 0;
        for (index, symbol) in symbols.iter().enumerate() {
            let value = u64::from(symbol.value());
            if index == 0 || last >= value {
                total += value;
            } else {
                // `last` was already added once; swap it for the subtractive reading.
                // After an earlier subtraction the total can be below `2 * last` ("IXC").
                total = (total + value)
                    .checked_sub(2 * last)
                    .ok_or_else(|| NumeralError::invalid_result(text, "a negative total"))?;
            }
            last = value;
        }

        match u32::try_from(total) {
            Ok(value) if in_range(total) => Ok(value),
            _ => Err(NumeralError::invalid_result(text, total.to_string())),
        }
    }

    fn is_valid_numeral(&self, text: &str) -> bool {
        self.parse(text).is_some()
    }

    fn list_all(&self) -> Result<Vec<NumeralEntry>> {
        self.entries().collect()
    }
}

/// Iterator returned by [`NumeralConverter::entries`].
#[derive(Debug, Clone)]
pub struct Entries {
    converter: NumeralConverter,
    next: u32,
}

impl Iterator for Entries {
    type Item = Result<NumeralEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > MAX_VALUE {
            return None;
        }
        let value = self.next;
        self.next += 1;
        Some(
            self.converter
                .int_to_numeral(value)
                .map(|numeral| NumeralEntry { value, numeral }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (MAX_VALUE + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Entries {}
