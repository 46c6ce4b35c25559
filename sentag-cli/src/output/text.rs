//! Plain text output formatter

use super::{NormalizedRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one normalized text per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &NormalizedRecord) -> Result<()> {
        writeln!(self.writer, "{}", record.normalized)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: usize, normalized: &str) -> NormalizedRecord {
        NormalizedRecord {
            source: "<text>".to_string(),
            line,
            input: String::new(),
            normalized: normalized.to_string(),
        }
    }

    #[test]
    fn test_one_line_per_record() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_record(&record(1, "NOT~ko na kaya bye")).unwrap();
            formatter.format_record(&record(2, "")).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "NOT~ko na kaya bye\n\n");
    }
}
