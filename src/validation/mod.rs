pub mod checksum;
pub mod mrz;

pub use checksum::{check_digit, validate};
pub use mrz::MrzValidator;
