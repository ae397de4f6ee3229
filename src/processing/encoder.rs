// Lay decoded passport fields back out as TD3 MRZ lines
use crate::models::{DecodedMrz, MrzLinePair, FILLER, TD3_LINE_LENGTH};
use crate::processing::fields::iso_to_yymmdd;
use crate::validation::checksum::check_digit;

pub struct MrzEncoder;

impl MrzEncoder {
    /// Encode a record into a TD3 line pair with freshly computed check digits.
    /// Values longer than their slot are cut.
    pub fn encode(mrz: &DecodedMrz) -> MrzLinePair {
        let name = if mrz.given_names.is_empty() {
            Self::to_filler(&mrz.surname)
        } else {
            format!(
                "{}<<{}",
                Self::to_filler(&mrz.surname),
                Self::to_filler(&mrz.given_names)
            )
        };
        let line1 = format!(
            "{}<{}{}",
            Self::pad(&mrz.document_type, 1),
            Self::pad(&mrz.issuing_country, 3),
            Self::pad(&name, 39)
        );

        let number = Self::pad(&mrz.passport_number, 9);
        let birth = Self::pad(&iso_to_yymmdd(&mrz.birth_date).unwrap_or_default(), 6);
        let expiry = Self::pad(&iso_to_yymmdd(&mrz.expiry_date).unwrap_or_default(), 6);
        let personal = Self::pad(&mrz.personal_number, 14);
        let personal_check = if mrz.personal_number.is_empty() {
            FILLER.to_string()
        } else {
            check_digit(&personal).to_string()
        };

        let number_part = format!("{}{}", number, check_digit(&number));
        let birth_part = format!("{}{}", birth, check_digit(&birth));
        let expiry_part = format!(
            "{}{}{}{}",
            expiry,
            check_digit(&expiry),
            personal,
            personal_check
        );
        let composite = check_digit(&format!("{}{}{}", number_part, birth_part, expiry_part));

        let line2 = format!(
            "{}{}{}{}{}{}",
            number_part,
            Self::pad(&mrz.nationality, 3),
            birth_part,
            mrz.sex.code(),
            expiry_part,
            composite
        );
        debug_assert_eq!(line2.chars().count(), TD3_LINE_LENGTH);

        MrzLinePair::new(&line1, &line2)
    }

    fn to_filler(value: &str) -> String {
        value.split_whitespace().collect::<Vec<&str>>().join("<")
    }

    fn pad(value: &str, width: usize) -> String {
        value
            .chars()
            .chain(std::iter::repeat(FILLER))
            .take(width)
            .collect()
    }
}
