//! Captured fields of a single matching log line.

use regex::Regex;

use crate::error::{AnalyzeError, RecordKind, Result};

/// The capture groups of one line that matched a record pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    fields: Vec<String>,
}

impl LogRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Capture the groups of `line` if it matches `pattern`.
    ///
    /// Optional groups that did not participate become empty strings.
    pub fn capture(pattern: &Regex, line: &str) -> Option<Self> {
        let caps = pattern.captures(line)?;
        let fields = caps
            .iter()
            .skip(1)
            .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect();
        Some(Self { fields })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The text of field `index`, or an empty string when absent.
    pub fn text(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    /// Parse field `index` as a float.
    pub fn float(&self, index: usize, source_id: &str, kind: RecordKind) -> Result<f64> {
        let text = self.text(index);
        text.parse::<f64>()
            .map_err(|_| AnalyzeError::MalformedNumber {
                source_id: source_id.to_string(),
                kind,
                text: text.to_string(),
            })
    }
}

/// Every line of `text` that matches `pattern`, in line order.
pub fn scan(pattern: &Regex, text: &str) -> Vec<LogRecord> {
    text.lines()
        .filter_map(|line| LogRecord::capture(pattern, line))
        .collect()
}
