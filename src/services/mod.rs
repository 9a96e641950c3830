pub mod differencer;
pub mod extractor;
pub mod output_writer;
pub mod set_builder;

pub use differencer::{diff_all, diff_characters, diff_units};
pub use extractor::{extract_chinese_chars, is_chinese_char, normalize_unit};
pub use output_writer::OutputWriter;
pub use set_builder::{build_baseline, build_candidates};
