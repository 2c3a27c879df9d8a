// Source module: where header templates and input tables are loaded from.

pub mod fetcher;
pub mod traits;

pub use fetcher::{FileSource, HttpSource, source_for};
pub use traits::TableSource;
