pub mod encoder;
pub mod fields;
pub mod lines;
pub mod mrz;
pub mod ocr;

pub use encoder::MrzEncoder;
pub use fields::yymmdd_to_iso;
pub use lines::find_mrz_lines;
pub use mrz::MrzDecoder;
pub use ocr::{OcrProvider, VisionRequest, VisionResponse};
