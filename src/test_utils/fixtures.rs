//! Test fixtures shared by unit and integration tests.

use crate::core::NumeralEntry;

/// Values paired with their canonical numerals.
pub fn canonical_pairs() -> Vec<(u32, &'static str)> {
    vec![
        (1, "I"),
        (2, "II"),
        (3, "III"),
        (4, "IV"),
        (5, "V"),
        (6, "VI"),
        (9, "IX"),
        (10, "X"),
        (11, "XI"),
        (14, "XIV"),
        (15, "XV"),
        (19, "XIX"),
        (40, "XL"),
        (44, "XLIV"),
        (49, "XLIX"),
        (50, "L"),
        (55, "LV"),
        (60, "LX"),
        (90, "XC"),
        (99, "XCIX"),
        (100, "C"),
        (200, "CC"),
        (400, "CD"),
        (444, "CDXLIV"),
        (490, "CDXC"),
        (500, "D"),
        (550, "DL"),
        (650, "DCL"),
        (900, "CM"),
        (999, "CMXCIX"),
        (1000, "M"),
        (1994, "MCMXCIV"),
        (2000, "MM"),
        (2024, "MMXXIV"),
        (3888, "MMMDCCCLXXXVIII"),
        (3999, "MMMCMXCIX"),
    ]
}

/// Strings the validator must reject.
pub fn invalid_numerals() -> Vec<&'static str> {
    vec![
        "", "A", "XA", "ABC", "IIII", "VV", "LL", "DD", "XXXX", "CCCC", "VX", "LC", "DM", "IV ",
        "4", "-I",
    ]
}

/// The first few rows of the enumeration.
pub fn sample_entries() -> Vec<NumeralEntry> {
    [(1, "I"), (2, "II"), (3, "III"), (4, "IV")]
        .into_iter()
        .map(|(value, numeral)| NumeralEntry {
            value,
            numeral: numeral.to_string(),
        })
        .collect()
}
