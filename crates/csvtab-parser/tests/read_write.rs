//! Whole-file read and write through the filesystem.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use csvtab_parser::{ParseError, Parser, ParserConfig, Table, WriterSink};
use tempfile::TempDir;

fn temp_csv(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("test.csv");
    fs::write(&path, contents).expect("write file");
    (dir, path)
}

fn read_with(contents: &str, record_delimiter: &str) -> Table {
    let (_dir, path) = temp_csv(contents);
    let mut parser = Parser::new();
    parser.set_filename(&path);
    parser.set_record_delimiter(record_delimiter);
    parser.read_entire_file().expect("read csv")
}

fn assert_two_by_two(table: &Table) {
    assert_eq!(table.num_records(), 2);
    assert_eq!(table[0][0], "element11");
    assert_eq!(table[0][1], "element12");
    assert_eq!(table[1][0], "element21");
    assert_eq!(table[1][1], "element22");
}

#[test]
fn basic_read() {
    let table = read_with("element11,element12\nelement21,element22", "\n");
    assert_two_by_two(&table);
    for record in &table {
        assert_eq!(record.num_fields(), 2);
    }
}

#[test]
fn lf_at_end_of_file() {
    let table = read_with("element11,element12\nelement21,element22\n", "\n");
    assert_two_by_two(&table);
}

#[test]
fn crlf_at_end_of_rows() {
    let table = read_with("element11,element12\r\nelement21,element22\r\n", "\r\n");
    assert_two_by_two(&table);
}

#[test]
fn crlf_content_with_lf_delimiter_keeps_carriage_returns() {
    let table = read_with("element11,element12\r\nelement21,element22\r\n", "\n");
    assert_eq!(table.num_records(), 2);
    assert_eq!(table[0][0], "element11");
    assert_eq!(table[0][1], "element12\r");
    assert_eq!(table[1][1], "element22\r");
}

#[test]
fn empty_file_has_zero_records() {
    let table = read_with("", "\n");
    assert_eq!(table.num_records(), 0);
}

#[test]
fn nonexistent_path_is_file_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut parser = Parser::new();
    parser.set_filename(dir.path().join("missing.csv"));

    let err = parser.read_entire_file().unwrap_err();
    assert!(matches!(err, ParseError::FileNotFound { .. }));
    assert!(err.is_io());
}

#[test]
fn out_of_range_access_is_an_error() {
    let table = read_with("element11,element12\nelement21,element22", "\n");

    let err = table.field(2, 0).unwrap_err();
    assert!(err.is_index_out_of_range());
    let err = table.field(0, 2).unwrap_err();
    assert!(err.is_index_out_of_range());

    let err: ParseError = table.record(7).unwrap_err().into();
    assert!(err.is_index_out_of_range());
}

#[test]
fn write_overwrites_existing_file() {
    let (_dir, path) = temp_csv("old,content,that,is,longer\n");
    let mut parser = Parser::with_config(ParserConfig::tsv());
    parser.set_filename(&path);

    let table = Table::from(vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string(), "d".to_string()],
    ]);
    parser.write(&table).expect("write csv");

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\tb\nc\td");
    assert_eq!(parser.read_entire_file().unwrap(), table);
}

#[test]
fn write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut parser = Parser::new();
    parser.set_filename(dir.path().join("no_such_dir").join("out.csv"));

    let err = parser.write(&Table::new()).unwrap_err();
    assert!(matches!(err, ParseError::Write { .. }));
    assert!(err.is_io());
}

#[test]
fn reparse_replaces_previous_table() {
    let (_dir, path) = temp_csv("a,b\nc,d\ne,f");
    let mut parser = Parser::new();
    parser.set_filename(&path);

    let mut table = parser.read_entire_file().unwrap();
    assert_eq!(table.num_records(), 3);

    fs::write(&path, "x").unwrap();
    table = parser.read_entire_file().unwrap();
    assert_eq!(table.to_rows(), vec![vec!["x"]]);
}

#[test]
fn connected_stream_receives_trace_lines() {
    let (_dir, path) = temp_csv("a,b\n");
    let sink = Arc::new(WriterSink::new(Vec::new()));
    let mut parser = Parser::new().with_diagnostics(sink.clone());
    parser.set_filename(&path);
    parser.read_entire_file().unwrap();

    parser.set_filename(path.with_file_name("gone.csv"));
    assert!(parser.read_entire_file().is_err());
    drop(parser);

    let sink = Arc::try_unwrap(sink).expect("sole owner");
    let log = String::from_utf8(sink.into_inner()).unwrap();
    assert!(log.contains("[debug] parsed 1 records from"));
    assert!(log.contains("[error] file not found:"));
}
