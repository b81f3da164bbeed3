//! Tests for decoder module

use super::*;
use crate::error::Error;
use crate::types::Record;
use pretty_assertions::assert_eq;

fn record(fields: &[&str]) -> Record {
    fields.iter().copied().collect()
}

// ============================================================================
// DecoderConfig Tests
// ============================================================================

#[test]
fn test_decoder_config_default() {
    let config = DecoderConfig::default();
    assert_eq!(config.delimiter, ',');
    assert!(config.has_header);
    assert!(!config.strict_columns);
    assert_eq!(config, DecoderConfig::csv());
}

#[test]
fn test_decoder_config_tsv() {
    let config = DecoderConfig::tsv();
    assert_eq!(config.delimiter, '\t');
    assert!(config.has_header);
}

#[test]
fn test_decoder_config_with_delimiter() {
    let config = DecoderConfig::with_delimiter(';', false).strict(true);
    assert_eq!(config.delimiter, ';');
    assert!(!config.has_header);
    assert!(config.strict_columns);
}

#[test]
fn test_decoder_config_rejects_quote_delimiter() {
    let err = DecoderConfig::with_delimiter('"', true)
        .validate()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "delimiter"));

    assert!(DecoderConfig::with_delimiter('\n', true).validate().is_err());
    assert!(DecoderConfig::tsv().validate().is_ok());
}

#[test]
fn test_decoder_config_from_yaml_defaults() {
    let config: DecoderConfig = serde_yaml::from_str("strict_columns: true").unwrap();
    assert_eq!(config.delimiter, ',');
    assert!(config.has_header);
    assert!(config.strict_columns);
}

// ============================================================================
// CSV Decoder Tests
// ============================================================================

#[test]
fn test_csv_decoder_basic() {
    let decoder = CsvDecoder::new();
    let body = "id,name,age\n1,Alice,30\n2,Bob,25";

    let table = decoder.decode(body).unwrap();
    assert_eq!(
        table.header,
        Some(vec!["id".to_string(), "name".to_string(), "age".to_string()])
    );
    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0], record(&["1", "Alice", "30"]));
    assert_eq!(table.records[1], record(&["2", "Bob", "25"]));
}

#[test]
fn test_csv_decoder_header_excluded_from_records() {
    let decoder = CsvDecoder::new();
    let table = decoder.decode("a,b\n").unwrap();
    assert_eq!(table.header, Some(vec!["a".to_string(), "b".to_string()]));
    assert!(table.is_empty());
}

#[test]
fn test_csv_decoder_empty_input() {
    let decoder = CsvDecoder::new();
    let table = decoder.decode("").unwrap();
    assert!(table.header.is_none());
    assert!(table.is_empty());
}

#[test]
fn test_csv_decoder_quoted_fields() {
    let decoder = CsvDecoder::new();
    let body = r##"id,name,description
1,"Alice","Hello, World"
2,"Bob","He said ""Hi"""##;

    let table = decoder.decode(body).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0].get(2), Some("Hello, World"));
    assert_eq!(table.records[1].get(2), Some("He said \"Hi\""));
}

#[test]
fn test_csv_decoder_quoted_newline() {
    let decoder = CsvDecoder::new();
    let body = "id,note\n1,\"line one\nline two\"\n2,plain\n";

    let table = decoder.decode(body).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0].get(1), Some("line one\nline two"));
    assert_eq!(table.records[1], record(&["2", "plain"]));
}

#[test]
fn test_csv_decoder_keeps_whitespace_and_empty_fields() {
    let decoder = CsvDecoder::new();
    let table = decoder.decode("a,b,c\n x ,,\"\"\n").unwrap();
    assert_eq!(table.records[0], record(&[" x ", "", ""]));
}

#[test]
fn test_csv_decoder_quote_inside_unquoted_field_is_literal() {
    let decoder = CsvDecoder::new();
    let table = decoder.decode("name\nO\"Brien\n").unwrap();
    assert_eq!(table.records[0], record(&["O\"Brien"]));
}

#[test]
fn test_csv_decoder_crlf_and_blank_lines() {
    let decoder = CsvDecoder::new();
    let body = "id,name\r\n1,Alice\r\n\r\n2,Bob\r\n";

    let table = decoder.decode(body).unwrap();
    assert_eq!(
        table.records,
        vec![record(&["1", "Alice"]), Record::default(), record(&["2", "Bob"])]
    );
}

#[test]
fn test_csv_decoder_blank_lines_are_empty_records() {
    let decoder = CsvDecoder::new();

    let table = decoder.decode("h\n1\n\n2\n").unwrap();
    assert_eq!(
        table.records,
        vec![record(&["1"]), Record::default(), record(&["2"])]
    );

    let table = decoder.decode("h\n1\n\n\n").unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.records[1].is_empty());
    assert!(table.records[2].is_empty());
}

#[test]
fn test_csv_decoder_blank_header_row() {
    let decoder = CsvDecoder::new();
    let table = decoder.decode("\na,b\n").unwrap();
    assert_eq!(table.header, Some(vec![]));
    assert_eq!(table.records, vec![record(&["a", "b"])]);

    let table = decoder.decode("\n").unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_csv_decoder_strict_columns_allows_blank_lines() {
    let decoder = CsvDecoder::from_config(&DecoderConfig::csv().strict(true));
    let table = decoder.decode("a,b\n1,2\n\n3,4\n").unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.records[1].is_empty());
}

#[test]
fn test_csv_decoder_strips_bom() {
    let decoder = CsvDecoder::new();
    let table = decoder.decode("\u{feff}Year,Name\n2016,Olivia\n").unwrap();
    assert_eq!(table.header.unwrap()[0], "Year");
}

#[test]
fn test_csv_decoder_no_header() {
    let decoder = CsvDecoder::with_options(',', false);
    let body = "1,Alice,30\n2,Bob,25";

    let table = decoder.decode(body).unwrap();
    assert!(table.header.is_none());
    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0], record(&["1", "Alice", "30"]));
}

#[test]
fn test_csv_decoder_tab_delimiter() {
    let decoder = CsvDecoder::with_options('\t', true);
    let body = "id\tname\n1\tAlice, Jr\n2\tBob";

    let table = decoder.decode(body).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0], record(&["1", "Alice, Jr"]));
}

#[test]
fn test_csv_decoder_ragged_rows_allowed_by_default() {
    let decoder = CsvDecoder::new();
    let table = decoder.decode("a,b,c\n1,2\n1,2,3,4\n").unwrap();
    assert_eq!(table.records[0].len(), 2);
    assert_eq!(table.records[1].len(), 4);
}

#[test]
fn test_csv_decoder_strict_columns() {
    let decoder = CsvDecoder::from_config(&DecoderConfig::csv().strict(true));
    let err = decoder.decode("a,b,c\n1,2,3\n1,2\n").unwrap_err();

    match err {
        Error::Format { line, message } => {
            assert_eq!(line, 3);
            assert_eq!(message, "expected 3 fields, found 2");
        }
        other => panic!("Expected Format error, got {other:?}"),
    }
}

#[test]
fn test_csv_decoder_strict_columns_without_header() {
    let config = DecoderConfig::with_delimiter(',', false).strict(true);
    let decoder = CsvDecoder::from_config(&config);

    assert!(decoder.decode("1,2\n3,4\n").is_ok());
    assert!(matches!(
        decoder.decode("1,2\n3,4,5\n"),
        Err(Error::Format { line: 2, .. })
    ));
}

#[test]
fn test_csv_decoder_unterminated_quote() {
    let decoder = CsvDecoder::new();
    let err = decoder.decode("id,name\n1,Alice\n2,\"Bob\n3,Carol\n").unwrap_err();

    match err {
        Error::Format { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("unterminated"));
        }
        other => panic!("Expected Format error, got {other:?}"),
    }
}
