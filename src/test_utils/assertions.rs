//! Custom assertion helpers for common test patterns

use crate::core::RomanNumerals;
use crate::error::NumeralError;

/// Asserts that `value` converts to `expected` and back again
pub fn assert_round_trip(converter: &dyn RomanNumerals, value: u32, expected: &str) {
    let numeral = converter
        .int_to_numeral(value)
        .unwrap_or_else(|e| panic!("Expected {value} to convert, got error: {e}"));
    assert_eq!(numeral, expected, "Unexpected numeral for {value}");

    let decoded = converter
        .numeral_to_int(&numeral)
        .unwrap_or_else(|e| panic!("Expected {numeral} to decode, got error: {e}"));
    assert_eq!(decoded, value, "Numeral {numeral} decoded to the wrong value");
}

/// Asserts that a numeral is rejected both by validation and by conversion
pub fn assert_rejected_numeral(converter: &dyn RomanNumerals, text: &str) {
    assert!(
        !converter.is_valid_numeral(text),
        "Expected {text:?} to be rejected by validation"
    );
    match converter.numeral_to_int(text) {
        Err(NumeralError::InvalidNumeral { text: reported }) => assert_eq!(reported, text),
        other => panic!("Expected InvalidNumeral for {text:?}, got {other:?}"),
    }
}

/// Asserts that an integer is refused with InvalidInput
pub fn assert_rejected_value(converter: &dyn RomanNumerals, value: u32) {
    match converter.int_to_numeral(value) {
        Err(NumeralError::InvalidInput { value: reported }) => assert_eq!(reported, value),
        other => panic!("Expected InvalidInput for {value}, got {other:?}"),
    }
}

/// Asserts that text contains every expected fragment
pub fn assert_contains_all(text: &str, fragments: &[&str]) {
    for fragment in fragments {
        assert!(
            text.contains(fragment),
            "Expected output to contain {fragment:?}, but it was:\n{text}"
        );
    }
}
