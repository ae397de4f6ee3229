use log::warn;

use crate::models::{CheckDigitReport, MrzLinePair, MrzValidationResult, ValidationIssue};
use crate::processing::fields::{char_at, slice};
use crate::validation::checksum::validate;

pub struct MrzValidator;

impl MrzValidator {
    /// Recompute every TD3 line 2 check digit.
    ///
    /// Line 2 layout: document number [0,9) + check [9], birth date [13,19) +
    /// check [19], expiry [21,27) + check [27], personal number [28,42) + check
    /// [42], composite over [0,10) [13,20) [21,43) checked against [43].
    pub fn check_digits(pair: &MrzLinePair) -> CheckDigitReport {
        let line2 = pair.line2();
        let composite = format!(
            "{}{}{}",
            slice(line2, 0, 10),
            slice(line2, 13, 20),
            slice(line2, 21, 43)
        );

        CheckDigitReport {
            document_number: validate(&slice(line2, 0, 9), char_at(line2, 9)),
            birth_date: validate(&slice(line2, 13, 19), char_at(line2, 19)),
            expiry_date: validate(&slice(line2, 21, 27), char_at(line2, 27)),
            personal_number: validate(&slice(line2, 28, 42), char_at(line2, 42)),
            composite: validate(&composite, char_at(line2, 43)),
        }
    }

    pub fn validate(pair: &MrzLinePair) -> MrzValidationResult {
        let check_digits = Self::check_digits(pair);

        let issues: Vec<ValidationIssue> = check_digits
            .invalid_fields()
            .into_iter()
            .map(|field| {
                warn!("MRZ check digit mismatch for {}", field.label());
                ValidationIssue {
                    field,
                    message: format!("Check digit mismatch for {}", field.label()),
                }
            })
            .collect();

        MrzValidationResult {
            is_valid: issues.is_empty(),
            check_digits,
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckDigitField, Validity};

    fn specimen() -> MrzLinePair {
        MrzLinePair::new(
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7408122F1204159ZE184226B<<<<<10",
        )
    }

    #[test]
    fn test_specimen_is_fully_valid() {
        let result = MrzValidator::validate(&specimen());
        assert!(result.is_valid);
        assert!(result.issues.is_empty());
        assert_eq!(result.check_digits.composite, Validity::Valid);
        assert_eq!(result.check_digits.personal_number, Validity::Valid);
    }

    #[test]
    fn test_misread_digit_breaks_field_and_composite() {
        // birth date 740812 read as 740818
        let pair = MrzLinePair::new(
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7408182F1204159ZE184226B<<<<<10",
        );
        let result = MrzValidator::validate(&pair);
        assert!(!result.is_valid);
        assert_eq!(result.check_digits.document_number, Validity::Valid);
        assert_eq!(result.check_digits.birth_date, Validity::Invalid);
        assert_eq!(result.check_digits.composite, Validity::Invalid);
        let fields: Vec<CheckDigitField> = result.issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec![CheckDigitField::BirthDate, CheckDigitField::Composite]);
    }

    #[test]
    fn test_filler_check_digits_are_unknown() {
        let pair = MrzLinePair::new(
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
            "L898902C3<UTO740812<F120415<ZE184226B<<<<<<<",
        );
        let report = MrzValidator::check_digits(&pair);
        assert_eq!(report.document_number, Validity::Unknown);
        assert_eq!(report.birth_date, Validity::Unknown);
        assert_eq!(report.expiry_date, Validity::Unknown);
        assert_eq!(report.personal_number, Validity::Unknown);
        assert_eq!(report.composite, Validity::Unknown);
        assert!(MrzValidator::validate(&pair).is_valid);
    }

    #[test]
    fn test_truncated_line_reads_as_unknown() {
        let pair = MrzLinePair::new("P<UTO", "L898902C36UTO");
        let report = MrzValidator::check_digits(&pair);
        assert_eq!(report.document_number, Validity::Valid);
        assert_eq!(report.birth_date, Validity::Unknown);
        assert_eq!(report.composite, Validity::Unknown);
    }
}
