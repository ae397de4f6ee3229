use log::{debug, info};

use crate::models::{DecodedMrz, PassportForm};
use crate::processing::{find_mrz_lines, MrzDecoder, OcrProvider};
use crate::utils::Result;
use crate::validation::MrzValidator;

/// Receives decoded fields for display or editing.
pub trait Presenter {
    fn present(&mut self, form: &PassportForm, mrz: &DecodedMrz);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// OCR produced nothing but whitespace.
    NoText,
    /// Text was present but no MRZ line pair was found in it.
    NoMrz,
    Decoded(Box<DecodedMrz>),
}

impl ScanOutcome {
    pub fn decoded(&self) -> Option<&DecodedMrz> {
        match self {
            ScanOutcome::Decoded(mrz) => Some(mrz),
            _ => None,
        }
    }
}

pub struct PassportScanner;

impl PassportScanner {
    pub fn new() -> Self {
        PassportScanner
    }

    // Locate the MRZ in OCR text and decode it
    pub fn decode_text(&self, text: &str) -> Option<DecodedMrz> {
        let pair = find_mrz_lines(text)?;
        debug!("MRZ lines:\n{}", pair);

        let validation = MrzValidator::validate(&pair);
        let mrz = MrzDecoder::decode(&pair);
        info!(
            "Decoded MRZ for passport {} ({} check digit(s) invalid)",
            mrz.passport_number,
            validation.issues.len()
        );
        Some(mrz)
    }

    pub fn scan_text(&self, text: &str) -> ScanOutcome {
        if text.trim().is_empty() {
            debug!("OCR text is empty");
            return ScanOutcome::NoText;
        }

        match self.decode_text(text) {
            Some(mrz) => ScanOutcome::Decoded(Box::new(mrz)),
            None => {
                debug!("No MRZ line pair in {} bytes of OCR text", text.len());
                ScanOutcome::NoMrz
            }
        }
    }

    /// Run OCR on an image and scan the result. Only provider failures are errors.
    pub fn scan_image<P: OcrProvider + ?Sized>(&self, provider: &P, image: &[u8]) -> Result<ScanOutcome> {
        let text = provider.recognize(image)?;
        Ok(self.scan_text(&text))
    }

    /// Scan and hand any decoded result to the presenter.
    pub fn scan_and_present<R: Presenter + ?Sized>(&self, text: &str, presenter: &mut R) -> ScanOutcome {
        let outcome = self.scan_text(text);
        if let Some(mrz) = outcome.decoded() {
            presenter.present(&PassportForm::from(mrz), mrz);
        }
        outcome
    }
}

impl Default for PassportScanner {
    fn default() -> Self {
        Self::new()
    }
}
