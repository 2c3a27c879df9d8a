// Classifier module: keyword tables and the first-match classifiers over them.

pub mod keyword;
pub mod tables;

pub use keyword::{case_color, classify, strap_color, strap_material};
pub use tables::{ClassifierTable, KeywordRule};
