// Export module: serializes reconciled rows as CSV or XLSX.

pub mod writer;

pub use writer::{render, write_artifact};
