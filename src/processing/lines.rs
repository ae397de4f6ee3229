// Locate the two MRZ lines inside free-form OCR output
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{MrzLinePair, FILLER};

/// Shortest whitespace-free line still accepted as an MRZ candidate.
pub const MIN_MRZ_LINE_LENGTH: usize = 40;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Split OCR text into trimmed, non-empty lines.
pub fn candidate_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn is_mrz_like(line: &str) -> bool {
    line.chars().count() >= MIN_MRZ_LINE_LENGTH && line.contains(FILLER)
}

/// Return the first adjacent pair of lines that both look like MRZ lines
/// once internal whitespace is removed. No attempt is made to rank matches.
pub fn find_mrz_lines(text: &str) -> Option<MrzLinePair> {
    let lines = candidate_lines(text);

    lines.windows(2).find_map(|pair| {
        let first = WHITESPACE.replace_all(pair[0], "");
        let second = WHITESPACE.replace_all(pair[1], "");

        if is_mrz_like(&first) && is_mrz_like(&second) {
            Some(MrzLinePair::new(&first, &second))
        } else {
            None
        }
    })
}
