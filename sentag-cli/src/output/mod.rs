//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One normalized input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// File path, or `<text>` for command-line input
    pub source: String,
    /// 1-based line number within the source
    pub line: usize,
    pub input: String,
    pub normalized: String,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single record
    fn format_record(&mut self, record: &NormalizedRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
