use crate::models::{DecodedMrz, MrzLinePair, Sex};
use crate::processing::fields::{slice, split_name, strip_filler, yymmdd_to_iso};
use crate::validation::MrzValidator;

/// Decoder for the ICAO 9303 TD3 (passport) layout.
pub struct MrzDecoder;

impl MrzDecoder {
    /// Decode a line pair into passport fields. Never fails: a slice that
    /// cannot be read yields an empty value for that field only.
    pub fn decode(pair: &MrzLinePair) -> DecodedMrz {
        let line1 = pair.line1();
        let line2 = pair.line2();

        // Line 1: [0,1) document type, [2,5) issuing state, [5,44) name
        let (surname, given_names) = split_name(&slice(line1, 5, 44));

        // Line 2: [0,9) number, [10,13) nationality, [13,19) birth date,
        // [20,21) sex, [21,27) expiry, [28,42) personal number
        DecodedMrz {
            document_type: strip_filler(&slice(line1, 0, 1)),
            issuing_country: strip_filler(&slice(line1, 2, 5)),
            surname,
            given_names,
            passport_number: strip_filler(&slice(line2, 0, 9)),
            nationality: strip_filler(&slice(line2, 10, 13)),
            birth_date: yymmdd_to_iso(&slice(line2, 13, 19)).unwrap_or_default(),
            sex: Sex::from_code(&slice(line2, 20, 21)),
            expiry_date: yymmdd_to_iso(&slice(line2, 21, 27)).unwrap_or_default(),
            personal_number: strip_filler(&slice(line2, 28, 42)),
            check_digits: MrzValidator::check_digits(pair),
        }
    }
}
