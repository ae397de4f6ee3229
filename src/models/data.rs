use serde::{Serialize, Serializer};
use std::fmt;

/// Padding / placeholder character used throughout the MRZ.
pub const FILLER: char = '<';

/// Characters per line in a TD3 (passport) MRZ.
pub const TD3_LINE_LENGTH: usize = 44;

/// The two adjacent lines of a TD3 machine readable zone.
///
/// Both lines are normalized to exactly 44 characters on construction: short
/// lines are padded with filler, long ones are cut. A slice that falls past the
/// end of what OCR actually produced therefore reads as filler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MrzLinePair {
    line1: String,
    line2: String,
}

impl MrzLinePair {
    pub fn new(line1: &str, line2: &str) -> Self {
        MrzLinePair {
            line1: Self::fit_to_width(line1),
            line2: Self::fit_to_width(line2),
        }
    }

    pub fn line1(&self) -> &str {
        &self.line1
    }

    pub fn line2(&self) -> &str {
        &self.line2
    }

    fn fit_to_width(line: &str) -> String {
        line.chars()
            .chain(std::iter::repeat(FILLER))
            .take(TD3_LINE_LENGTH)
            .collect()
    }
}

impl fmt::Display for MrzLinePair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n{}", self.line1, self.line2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sex {
    Male,
    Female,
    Unspecified,
}

impl Sex {
    /// Map an MRZ sex code. Total over all inputs: anything other than `M` or
    /// `F` (filler, `X`, OCR noise, empty) is `Unspecified`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "M" => Sex::Male,
            "F" => Sex::Female,
            _ => Sex::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Unspecified => "Unspecified",
        }
    }

    /// The single-character code written back into an MRZ.
    pub fn code(&self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
            Sex::Unspecified => FILLER,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing a field against its check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    /// The check digit slot holds filler.
    Unknown,
}

impl Validity {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Validity::Valid => Some(true),
            Validity::Invalid => Some(false),
            Validity::Unknown => None,
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Validity::Valid => "valid",
            Validity::Invalid => "invalid",
            Validity::Unknown => "unknown",
        })
    }
}

// Serialized as true / false / null for the presentation layer.
impl Serialize for Validity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_bool() {
            Some(value) => serializer.serialize_bool(value),
            None => serializer.serialize_none(),
        }
    }
}

/// Fields of TD3 line 2 that carry their own check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckDigitField {
    DocumentNumber,
    BirthDate,
    ExpiryDate,
    PersonalNumber,
    Composite,
}

impl CheckDigitField {
    pub const ALL: [CheckDigitField; 5] = [
        CheckDigitField::DocumentNumber,
        CheckDigitField::BirthDate,
        CheckDigitField::ExpiryDate,
        CheckDigitField::PersonalNumber,
        CheckDigitField::Composite,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CheckDigitField::DocumentNumber => "document number",
            CheckDigitField::BirthDate => "date of birth",
            CheckDigitField::ExpiryDate => "date of expiry",
            CheckDigitField::PersonalNumber => "personal number",
            CheckDigitField::Composite => "composite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDigitReport {
    pub document_number: Validity,
    pub birth_date: Validity,
    pub expiry_date: Validity,
    pub personal_number: Validity,
    pub composite: Validity,
}

impl CheckDigitReport {
    pub fn get(&self, field: CheckDigitField) -> Validity {
        match field {
            CheckDigitField::DocumentNumber => self.document_number,
            CheckDigitField::BirthDate => self.birth_date,
            CheckDigitField::ExpiryDate => self.expiry_date,
            CheckDigitField::PersonalNumber => self.personal_number,
            CheckDigitField::Composite => self.composite,
        }
    }

    /// Fields whose check digit is present and wrong.
    pub fn invalid_fields(&self) -> Vec<CheckDigitField> {
        CheckDigitField::ALL
            .iter()
            .copied()
            .filter(|field| self.get(*field) == Validity::Invalid)
            .collect()
    }

    pub fn all_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }
}

/// Structured result of decoding one MRZ. Built fresh per scan and owned by
/// whoever asked for the decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedMrz {
    pub document_type: String,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: String,
    pub passport_number: String,
    pub nationality: String,
    /// `YYYY-MM-DD`, or empty when the MRZ date is unreadable.
    pub birth_date: String,
    pub sex: Sex,
    /// `YYYY-MM-DD`, or empty when the MRZ date is unreadable.
    pub expiry_date: String,
    pub personal_number: String,
    pub check_digits: CheckDigitReport,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: CheckDigitField,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct MrzValidationResult {
    pub is_valid: bool,
    pub check_digits: CheckDigitReport,
    pub issues: Vec<ValidationIssue>,
}

/// Flat record handed to a presentation layer: every field is a plain string,
/// empty when the MRZ did not yield a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassportForm {
    pub surname: String,
    pub given_names: String,
    pub passport_number: String,
    pub nationality: String,
    pub birth_date: String,
    pub sex: String,
    pub expiry_date: String,
    pub issuing_country: String,
}

impl From<&DecodedMrz> for PassportForm {
    fn from(mrz: &DecodedMrz) -> Self {
        PassportForm {
            surname: mrz.surname.clone(),
            given_names: mrz.given_names.clone(),
            passport_number: mrz.passport_number.clone(),
            nationality: mrz.nationality.clone(),
            birth_date: mrz.birth_date.clone(),
            sex: mrz.sex.to_string(),
            expiry_date: mrz.expiry_date.clone(),
            issuing_country: mrz.issuing_country.clone(),
        }
    }
}
