//! Mock implementations for testing
//!
//! A scriptable stand-in for [`RomanNumerals`] so that the presentation layer
//! can be exercised against failures the real converter never produces.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::{NumeralEntry, RomanNumerals};
use crate::error::{NumeralError, Result};

/// A builder for mock converters with canned answers
#[derive(Default)]
pub struct MockConverterBuilder {
    numerals: HashMap<u32, Result<String>>,
    values: HashMap<String, Result<u32>>,
    listing: Option<Result<Vec<NumeralEntry>>>,
}

impl MockConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_numeral(mut self, value: u32, numeral: impl Into<String>) -> Self {
        self.numerals.insert(value, Ok(numeral.into()));
        self
    }

    pub fn with_numeral_error(mut self, value: u32, error: NumeralError) -> Self {
        self.numerals.insert(value, Err(error));
        self
    }

    pub fn with_value(mut self, text: impl Into<String>, value: u32) -> Self {
        self.values.insert(text.into(), Ok(value));
        self
    }

    pub fn with_value_error(mut self, text: impl Into<String>, error: NumeralError) -> Self {
        self.values.insert(text.into(), Err(error));
        self
    }

    pub fn with_listing(mut self, listing: Result<Vec<NumeralEntry>>) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn build(self) -> MockConverter {
        MockConverter {
            numerals: self.numerals,
            values: self.values,
            listing: self.listing.unwrap_or_else(|| Ok(Vec::new())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

/// Answers only what it was told to; everything else is an invalid-input error.
pub struct MockConverter {
    numerals: HashMap<u32, Result<String>>,
    values: HashMap<String, Result<u32>>,
    listing: Result<Vec<NumeralEntry>>,
    calls: Mutex<Vec<String>>,
}

impl MockConverter {
    /// Calls received so far, formatted as `operation(argument)`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl RomanNumerals for MockConverter {
    fn int_to_numeral(&self, value: u32) -> Result<String> {
        self.record(format!("int_to_numeral({value})"));
        self.numerals
            .get(&value)
            .cloned()
            .unwrap_or_else(|| Err(NumeralError::invalid_input(value)))
    }

    fn numeral_to_int(&self, text: &str) -> Result<u32> {
        self.record(format!("numeral_to_int({text})"));
        self.values
            .get(text)
            .cloned()
            .unwrap_or_else(|| Err(NumeralError::invalid_numeral(text)))
    }

    fn is_valid_numeral(&self, text: &str) -> bool {
        self.record(format!("is_valid_numeral({text})"));
        matches!(self.values.get(text), Some(Ok(_)))
    }

    fn list_all(&self) -> Result<Vec<NumeralEntry>> {
        self.record("list_all()".to_string());
        self.listing.clone()
    }
}
