//! Common types used throughout hyperpage
//!
//! This module contains the record type produced by the CSV provider
//! and small shared enums.

use serde::{Deserialize, Serialize};
use std::ops::Index;

// ============================================================================
// Record
// ============================================================================

/// A single row of a tabular dataset.
///
/// Fields are kept as raw strings in source order. Pagination never looks
/// inside a record; it serializes as a plain JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Vec<String>);

impl Record {
    /// Create a record from its fields
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// All fields in source order
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Field at `index`, if present
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the record and return its fields
    pub fn into_fields(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Index<usize> for Record {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level accepted in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Everything, including per-page traces
    Trace,
    /// Page computations and dataset loading steps
    Debug,
    /// Dataset loads
    #[default]
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record: Record = ["2016", "FEMALE", "ASIAN AND PACIFIC ISLANDER", "Olivia"]
            .into_iter()
            .collect();

        assert_eq!(record.len(), 4);
        assert!(!record.is_empty());
        assert_eq!(record.get(3), Some("Olivia"));
        assert_eq!(record.get(4), None);
        assert_eq!(&record[1], "FEMALE");
    }

    #[test]
    fn test_record_serializes_as_array() {
        let record = Record::new(vec!["a".to_string(), "b,c".to_string()]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"["a","b,c"]"#);

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);

        let level: LogLevel = serde_yaml::from_str("WARN").unwrap();
        assert_eq!(level, LogLevel::Warn);
    }
}
