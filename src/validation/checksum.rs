use crate::models::{Validity, FILLER};

/// ICAO 9303 weight cycle applied over the characters of a field.
const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Numeric value of one MRZ character: filler is 0, digits are their value and
/// letters run from A=10 to Z=35. Anything else counts as filler.
fn char_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32 + 10,
        'a'..='z' => c as u32 - 'a' as u32 + 10,
        _ => 0,
    }
}

/// Compute the ICAO check digit (0-9) for `data`.
pub fn check_digit(data: &str) -> u32 {
    data.chars()
        .zip(WEIGHTS.iter().cycle())
        .map(|(c, weight)| char_value(c) * weight)
        .sum::<u32>()
        % 10
}

/// Compare `field` against the check character read from the MRZ.
pub fn validate(field: &str, check_char: char) -> Validity {
    if check_char == FILLER {
        return Validity::Unknown;
    }
    match check_char.to_digit(10) {
        Some(digit) if digit == check_digit(field) => Validity::Valid,
        _ => Validity::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icao_document_number_example() {
        assert_eq!(check_digit("L898902C3"), 6);
        assert_eq!(validate("L898902C3", '6'), Validity::Valid);
    }

    #[test]
    fn test_dates_from_specimen() {
        assert_eq!(check_digit("740812"), 2);
        assert_eq!(check_digit("120415"), 9);
    }

    #[test]
    fn test_filler_counts_as_zero() {
        assert_eq!(check_digit("<<<<<<<<<<<<<<"), 0);
        assert_eq!(check_digit("ZE184226B<<<<<"), 1);
        assert_eq!(check_digit(""), 0);
    }

    #[test]
    fn test_filler_check_char_is_unknown() {
        assert_eq!(validate("L898902C3", '<'), Validity::Unknown);
    }

    #[test]
    fn test_mismatch_and_garbage_are_invalid() {
        assert_eq!(validate("L898902C3", '5'), Validity::Invalid);
        assert_eq!(validate("L898902C3", 'O'), Validity::Invalid);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let first = validate("123456789", '7');
        assert_eq!(first, Validity::Valid);
        assert_eq!(validate("123456789", '7'), first);
        assert_eq!(validate("123456789", '0'), validate("123456789", '0'));
    }
}
