//! Property-based tests for the numeral converter
//!
//! These properties cover the whole representable range and arbitrary text,
//! rather than the handful of values pinned down in the unit tests.

#[cfg(test)]
mod tests {
    use crate::core::{NumeralConverter, RomanNumerals, MAX_VALUE, MIN_VALUE};
    use crate::error::NumeralError;
    use proptest::prelude::*;

    // Strategy for strings built only from numeral symbols, in either case
    prop_compose! {
        fn symbol_string()(
            text in "[IVXLCDMivxlcdm]{1,16}",
        ) -> String {
            text
        }
    }

    // Strategy for a symbol repeated more often than the rules allow
    prop_compose! {
        fn overlong_run()(
            repeated in prop::sample::select(vec![
                ("I", 4usize), ("X", 4), ("C", 4), ("V", 2), ("L", 2), ("D", 2),
            ]),
            extra in 0usize..3,
            prefix in prop::sample::select(vec!["", "M", "MM", "MMM"]),
        ) -> String {
            let (symbol, min_run) = repeated;
            format!("{prefix}{}", symbol.repeat(min_run + extra))
        }
    }

    // Strategy for chains where each subtractive symbol precedes a larger one, e.g. "MMIXCM"
    prop_compose! {
        fn ascending_chain()(
            leading in "M{0,3}",
            chain in prop::sample::subsequence(vec!['I', 'X', 'C', 'M'], 2..=4),
        ) -> String {
            format!("{leading}{}", chain.into_iter().collect::<String>())
        }
    }

    proptest! {
        #[test]
        fn test_ascending_chains_decode_without_panicking(text in ascending_chain()) {
            let converter = NumeralConverter::new();
            prop_assert!(converter.is_valid_numeral(&text), "rejected {}", text);
            match converter.numeral_to_int(&text) {
                Ok(value) => prop_assert!((MIN_VALUE..=MAX_VALUE).contains(&value)),
                Err(NumeralError::InvalidResult { .. }) => {}
                Err(other) => prop_assert!(false, "unexpected error for {}: {}", text, other),
            }
        }

        #[test]
        fn test_round_trip(value in MIN_VALUE..=MAX_VALUE) {
            let converter = NumeralConverter::new();
            let numeral = converter.int_to_numeral(value).unwrap();
            prop_assert!(converter.is_valid_numeral(&numeral), "{} -> {}", value, numeral);
            prop_assert_eq!(converter.numeral_to_int(&numeral).unwrap(), value);
        }

        #[test]
        fn test_generated_numerals_are_uppercase_symbols(value in MIN_VALUE..=MAX_VALUE) {
            let numeral = NumeralConverter::new().int_to_numeral(value).unwrap();
            prop_assert!(!numeral.is_empty());
            prop_assert!(numeral.chars().all(|c| "IVXLCDM".contains(c)));
        }

        #[test]
        fn test_values_above_range_are_invalid_input(value in (MAX_VALUE + 1)..=u32::MAX) {
            let result = NumeralConverter::new().int_to_numeral(value);
            prop_assert_eq!(result, Err(NumeralError::invalid_input(value)));
        }

        #[test]
        fn test_validation_never_panics(text in ".*") {
            let converter = NumeralConverter::new();
            let _ = converter.is_valid_numeral(&text);
        }

        #[test]
        fn test_validation_ignores_case(text in symbol_string()) {
            let converter = NumeralConverter::new();
            prop_assert_eq!(
                converter.is_valid_numeral(&text),
                converter.is_valid_numeral(&text.to_uppercase())
            );
        }

        #[test]
        fn test_valid_text_never_fails_as_invalid_numeral(text in symbol_string()) {
            let converter = NumeralConverter::new();
            match converter.numeral_to_int(&text) {
                Ok(value) => prop_assert!((MIN_VALUE..=MAX_VALUE).contains(&value)),
                Err(NumeralError::InvalidNumeral { .. }) => {
                    prop_assert!(!converter.is_valid_numeral(&text));
                }
                Err(NumeralError::InvalidResult { .. }) => {
                    prop_assert!(converter.is_valid_numeral(&text));
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        #[test]
        fn test_overlong_runs_are_rejected(text in overlong_run()) {
            let converter = NumeralConverter::new();
            prop_assert!(!converter.is_valid_numeral(&text), "accepted {}", text);
            let is_invalid_numeral = matches!(
                converter.numeral_to_int(&text),
                Err(NumeralError::InvalidNumeral { .. })
            );
            prop_assert!(is_invalid_numeral);
        }

        #[test]
        fn test_non_subtractive_symbol_before_larger_is_rejected(
            smaller in prop::sample::select(vec!['V', 'L', 'D']),
            larger in prop::sample::select(vec!['X', 'L', 'C', 'D', 'M']),
        ) {
            let converter = NumeralConverter::new();
            let text = format!("{smaller}{larger}");
            let smaller_value = converter.symbols().value_of(smaller).unwrap();
            let larger_value = converter.symbols().value_of(larger).unwrap();
            prop_assume!(smaller_value < larger_value);
            prop_assert!(!converter.is_valid_numeral(&text));
        }

        #[test]
        fn test_foreign_character_invalidates(
            value in MIN_VALUE..=MAX_VALUE,
            position in 0usize..16,
            foreign in "[A-BE-HJ-KN-UWYZ0-9 ]",
        ) {
            let converter = NumeralConverter::new();
            let mut numeral = converter.int_to_numeral(value).unwrap();
            let at = position.min(numeral.len());
            numeral.insert_str(at, &foreign);
            prop_assert!(!converter.is_valid_numeral(&numeral));
        }
    }
}
