// Parser module: text-block label extraction and table decoding.

pub mod label_parser;
pub mod table_parser;

pub use label_parser::{extract_first, extract_labeled_value};
pub use table_parser::{TableFormat, read_header_row, read_rows};
