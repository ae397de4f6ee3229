pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod passport_scanner;

pub use passport_scanner::{PassportScanner, Presenter, ScanOutcome};
