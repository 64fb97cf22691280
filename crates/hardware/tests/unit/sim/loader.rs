//! Loader Tests.

use std::io::Write;

use pipesim_core::common::{LoadError, NUM_MEMORY};
use pipesim_core::sim::loader::{load_image, parse_image};
use tempfile::NamedTempFile;

fn create_temp_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn parses_one_word_per_line() {
    assert_eq!(parse_image("1\n-2\n+3\n").unwrap(), vec![1, -2, 3]);
}

#[test]
fn ignores_leading_whitespace_and_trailing_text() {
    assert_eq!(
        parse_image("  8454151   lw 0 1 7\n\t29360128 noop\n").unwrap(),
        vec![8454151, 29360128]
    );
}

#[test]
fn accepts_missing_final_newline_and_crlf() {
    assert_eq!(parse_image("5\r\n6").unwrap(), vec![5, 6]);
}

#[test]
fn skips_trailing_blank_lines() {
    assert_eq!(parse_image("5\n\n  \n").unwrap(), vec![5]);
    assert_eq!(parse_image("").unwrap(), Vec::<i32>::new());
}

#[test]
fn blank_line_inside_image_is_an_error() {
    let err = parse_image("5\n\n6\n").unwrap_err();
    assert!(matches!(err, LoadError::Parse { address: 1, .. }), "got {err:?}");
}

#[test]
fn non_numeric_line_reports_its_address() {
    let err = parse_image("1\n2\nhalt\n").unwrap_err();
    match err {
        LoadError::Parse { address, text } => {
            assert_eq!(address, 2);
            assert_eq!(text, "halt");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn word_overflow_is_a_parse_error() {
    assert!(parse_image("2147483647\n").is_ok());
    assert!(parse_image("-2147483648\n").is_ok());
    assert!(matches!(
        parse_image("2147483648\n"),
        Err(LoadError::Parse { address: 0, .. })
    ));
    assert!(matches!(parse_image("-\n"), Err(LoadError::Parse { address: 0, .. })));
}

#[test]
fn oversize_image_is_rejected() {
    let text = "0\n".repeat(NUM_MEMORY + 1);
    assert!(matches!(
        parse_image(&text),
        Err(LoadError::TooLarge { len, .. }) if len == NUM_MEMORY + 1
    ));
}

#[test]
fn loads_from_file() {
    let file = create_temp_file("8454151\n25165824\n");
    assert_eq!(load_image(file.path()).unwrap(), vec![8454151, 25165824]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_image(std::path::Path::new("/nonexistent/prog.mc")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
}
