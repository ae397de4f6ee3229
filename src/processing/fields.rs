// Field normalization for raw MRZ slices: filler handling, names and dates
use chrono::{Datelike, NaiveDate};

use crate::models::FILLER;

/// Two-digit years up to and including this value belong to the 2000s,
/// the rest to the 1900s.
pub const CENTURY_PIVOT: u32 = 29;

/// Take characters `[start, end)` of an MRZ line. Positions past the end of the
/// line simply yield fewer characters, never a panic.
pub fn slice(line: &str, start: usize, end: usize) -> String {
    line.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

/// Character at `index`, or filler when the line is too short.
pub fn char_at(line: &str, index: usize) -> char {
    line.chars().nth(index).unwrap_or(FILLER)
}

/// Drop every filler character.
pub fn strip_filler(field: &str) -> String {
    field.chars().filter(|c| *c != FILLER).collect()
}

/// Turn filler into spaces, collapse runs of whitespace and trim.
pub fn normalize_name(name: &str) -> String {
    name.replace(FILLER, " ")
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Split the TD3 name field into (surname, given names) on the first `<<`.
/// Given names stop at the next `<<`, so noise in the filler tail is dropped.
pub fn split_name(name_field: &str) -> (String, String) {
    match name_field.split_once("<<") {
        Some((surname, rest)) => {
            let given_names = rest.split("<<").next().unwrap_or("");
            (normalize_name(surname), normalize_name(given_names))
        }
        None => (normalize_name(name_field), String::new()),
    }
}

/// Parse an MRZ `YYMMDD` date, resolving the century around [`CENTURY_PIVOT`].
pub fn parse_yymmdd(s: &str) -> Option<NaiveDate> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let yy: u32 = s[0..2].parse().ok()?;
    let month: u32 = s[2..4].parse().ok()?;
    let day: u32 = s[4..6].parse().ok()?;
    let century = if yy <= CENTURY_PIVOT { 2000 } else { 1900 };

    NaiveDate::from_ymd_opt((century + yy) as i32, month, day)
}

/// `YYMMDD` to `YYYY-MM-DD`; `None` for non-digits or impossible dates.
pub fn yymmdd_to_iso(s: &str) -> Option<String> {
    parse_yymmdd(s).map(|date| date.format("%Y-%m-%d").to_string())
}

/// `YYYY-MM-DD` back to the MRZ `YYMMDD` form.
pub fn iso_to_yymmdd(iso: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()?;
    Some(format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    ))
}
