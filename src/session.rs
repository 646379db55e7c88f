//! Presentation-side handling of raw user input.
//!
//! A `Session` sits between whatever collects text from the user (command line
//! arguments, the interactive menu) and a [`RomanNumerals`] implementation. It
//! trims and parses input, applies output settings and logs each conversion.
//! The converter is passed in by the caller; nothing here constructs one.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::fmt;

use crate::core::{NumeralEntry, RomanNumerals, MAX_VALUE, MIN_VALUE};
use crate::logging;
use crate::settings::{OutputFormat, Settings};

/// Result of checking a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validity {
    pub numeral: String,
    pub valid: bool,
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{} is a valid numeral", self.numeral)
        } else if self.numeral.is_empty() {
            write!(f, "An empty string is not a valid numeral")
        } else {
            write!(f, "{} is not a valid numeral", self.numeral)
        }
    }
}

pub struct Session<'a> {
    converter: &'a dyn RomanNumerals,
    settings: Settings,
}

impl<'a> Session<'a> {
    pub fn new(converter: &'a dyn RomanNumerals, settings: Settings) -> Self {
        Self {
            converter,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parses `raw` as a whole number and converts it to a numeral.
    pub fn to_numeral(&self, raw: &str) -> Result<String> {
        let input = raw.trim();
        let result = parse_value(input).and_then(|value| {
            let numeral = self.converter.int_to_numeral(value)?;
            Ok(NumeralEntry { value, numeral })
        });

        let entry = match result {
            Ok(entry) => {
                logging::log_conversion("to_numeral", input, &entry.numeral);
                entry
            }
            Err(e) => {
                logging::log_conversion_failure("to_numeral", input, &e);
                return Err(e);
            }
        };

        match self.settings.format {
            OutputFormat::Text => Ok(self.cased(&entry.numeral)),
            OutputFormat::Json => self.entry_json(&entry),
        }
    }

    /// Converts a numeral, in any case, to its value.
    pub fn to_int(&self, raw: &str) -> Result<String> {
        let input = raw.trim();
        let value = match self.converter.numeral_to_int(input) {
            Ok(value) => {
                logging::log_conversion("to_int", input, &value.to_string());
                value
            }
            Err(e) => {
                let e = anyhow::Error::from(e);
                logging::log_conversion_failure("to_int", input, &e);
                return Err(e);
            }
        };

        match self.settings.format {
            OutputFormat::Text => Ok(value.to_string()),
            OutputFormat::Json => self.entry_json(&NumeralEntry {
                value,
                numeral: input.to_ascii_uppercase(),
            }),
        }
    }

    pub fn check(&self, raw: &str) -> Validity {
        let numeral = raw.trim().to_string();
        let valid = self.converter.is_valid_numeral(&numeral);
        tracing::debug!(numeral = %numeral, valid = valid, "Numeral checked");
        Validity { numeral, valid }
    }

    pub fn render_check(&self, validity: &Validity) -> Result<String> {
        match self.settings.format {
            OutputFormat::Text => Ok(validity.to_string()),
            OutputFormat::Json => {
                serde_json::to_string(validity).context("Failed to serialize check result")
            }
        }
    }

    /// Renders every value from 1 to 3999 with its numeral.
    pub fn list(&self) -> Result<String> {
        let entries: Vec<NumeralEntry> = self
            .converter
            .list_all()
            .context("Failed to enumerate numerals")?
            .into_iter()
            .map(|entry| NumeralEntry {
                numeral: self.cased(&entry.numeral),
                ..entry
            })
            .collect();
        tracing::debug!(count = entries.len(), "Numerals enumerated");

        match self.settings.format {
            OutputFormat::Text => Ok(entries
                .iter()
                .map(|entry| format!("{:>4}  {}", entry.value, entry.numeral))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&entries).context("Failed to serialize numerals")
            }
        }
    }

    fn cased(&self, numeral: &str) -> String {
        if self.settings.lowercase {
            numeral.to_ascii_lowercase()
        } else {
            numeral.to_string()
        }
    }

    fn entry_json(&self, entry: &NumeralEntry) -> Result<String> {
        let entry = NumeralEntry {
            value: entry.value,
            numeral: self.cased(&entry.numeral),
        };
        serde_json::to_string(&entry).context("Failed to serialize conversion")
    }
}

/// Integer parsing done by the presentation layer before calling the converter.
fn parse_value(input: &str) -> Result<u32> {
    let number: i64 = input
        .parse()
        .map_err(|_| anyhow!("'{input}' is not a whole number"))?;
    u32::try_from(number).map_err(|_| {
        anyhow!("{number} cannot be written as a numeral (expected {MIN_VALUE} to {MAX_VALUE})")
    })
}
