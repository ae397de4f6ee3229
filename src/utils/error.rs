use thiserror::Error;

/// Errors raised by the I/O glue around the MRZ core.
///
/// Decoding itself never fails: a missing MRZ is `None`, an unreadable field
/// is an empty string and a bad check digit is a `Validity` flag.
#[derive(Debug, Error)]
pub enum PassportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid OCR response: {0}")]
    InvalidOcrResponse(#[from] serde_json::Error),

    #[error("OCR error: {0}")]
    OcrError(String),

    #[error("No machine readable zone found in OCR text")]
    MrzNotFound,
}

pub type Result<T> = std::result::Result<T, PassportError>;
