//! Decoder implementations
//!
//! Delimited text is parsed record by record rather than line by line so
//! that quoted fields may contain delimiters and line breaks.

use super::types::{DecodedTable, DecoderConfig};
use crate::error::{Error, Result};
use crate::types::Record;
use std::iter::Peekable;
use std::str::Chars;

// ============================================================================
// CSV Decoder
// ============================================================================

/// CSV decoder with configurable delimiter and header handling
#[derive(Debug, Clone)]
pub struct CsvDecoder {
    /// Field delimiter
    delimiter: char,
    /// Whether the first row is a header
    has_header: bool,
    /// Whether ragged rows are rejected
    strict_columns: bool,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self::from_config(&DecoderConfig::default())
    }
}

impl CsvDecoder {
    /// Create a new CSV decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CSV decoder with custom settings
    pub fn with_options(delimiter: char, has_header: bool) -> Self {
        Self {
            delimiter,
            has_header,
            strict_columns: false,
        }
    }

    /// Create a CSV decoder from a decoder config
    pub fn from_config(config: &DecoderConfig) -> Self {
        Self {
            delimiter: config.delimiter,
            has_header: config.has_header,
            strict_columns: config.strict_columns,
        }
    }

    /// Decode a whole document into its header and data records
    pub fn decode(&self, body: &str) -> Result<DecodedTable> {
        let body = body.strip_prefix('\u{feff}').unwrap_or(body);
        let mut rows = RowReader::new(body, self.delimiter);

        let header = if self.has_header {
            match rows.next() {
                Some(row) => Some(row?.fields),
                None => return Ok(DecodedTable::default()),
            }
        } else {
            None
        };

        // Blank lines come through as empty records and are exempt from the width check
        let mut width = header.as_ref().map(Vec::len).filter(|&n| n > 0);
        let mut records = Vec::new();

        for row in rows.by_ref() {
            let row = row?;
            if self.strict_columns && !row.fields.is_empty() {
                match width {
                    Some(expected) if expected != row.fields.len() => {
                        return Err(Error::format(
                            row.line,
                            format!("expected {expected} fields, found {}", row.fields.len()),
                        ));
                    }
                    None => width = Some(row.fields.len()),
                    _ => {}
                }
            }
            records.push(Record::new(row.fields));
        }

        Ok(DecodedTable { header, records })
    }
}

/// One parsed row and the line it starts on
#[derive(Debug)]
struct ParsedRow {
    line: usize,
    fields: Vec<String>,
}

/// Streaming row parser over a document
struct RowReader<'a> {
    chars: Peekable<Chars<'a>>,
    delimiter: char,
    /// 1-based line of the next unread character
    line: usize,
}

impl<'a> RowReader<'a> {
    fn new(body: &'a str, delimiter: char) -> Self {
        Self {
            chars: body.chars().peekable(),
            delimiter,
            line: 1,
        }
    }

    /// Consume a line break whose first character was already read
    fn finish_line_break(&mut self, c: char) {
        if c == '\r' && self.chars.peek() == Some(&'\n') {
            self.chars.next();
        }
        self.line += 1;
    }

    fn read_row(&mut self) -> Result<ParsedRow> {
        let start_line = self.line;
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut at_field_start = true;

        while let Some(c) = self.chars.next() {
            if in_quotes {
                match c {
                    '"' if self.chars.peek() == Some(&'"') => {
                        current.push('"');
                        self.chars.next();
                    }
                    '"' => in_quotes = false,
                    '\n' | '\r' => {
                        current.push(c);
                        if c == '\r' && self.chars.peek() == Some(&'\n') {
                            current.push('\n');
                            self.chars.next();
                        }
                        self.line += 1;
                    }
                    _ => current.push(c),
                }
                continue;
            }

            match c {
                '"' if at_field_start => {
                    in_quotes = true;
                    at_field_start = false;
                }
                '\n' | '\r' => {
                    self.finish_line_break(c);
                    fields.push(current);
                    return Ok(ParsedRow {
                        line: start_line,
                        fields,
                    });
                }
                c if c == self.delimiter => {
                    fields.push(std::mem::take(&mut current));
                    at_field_start = true;
                }
                _ => {
                    current.push(c);
                    at_field_start = false;
                }
            }
        }

        if in_quotes {
            return Err(Error::format(start_line, "unterminated quoted field"));
        }

        fields.push(current);
        Ok(ParsedRow {
            line: start_line,
            fields,
        })
    }
}

impl Iterator for RowReader<'_> {
    type Item = Result<ParsedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.chars.peek().copied()? {
            c @ ('\n' | '\r') => {
                let line = self.line;
                self.chars.next();
                self.finish_line_break(c);
                Some(Ok(ParsedRow {
                    line,
                    fields: Vec::new(),
                }))
            }
            _ => Some(self.read_row()),
        }
    }
}
