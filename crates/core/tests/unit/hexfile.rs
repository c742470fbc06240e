//! # Hex Listing Tests
//!
//! Tests for `parse_hex_text` and `read_hex_bytes`: token grammar, comments, blank lines and
//! the two failure kinds.

use std::path::Path;

use hexkit_core::{Error, parse_hex_text, read_hex_bytes};
use proptest::prelude::*;
use proptest::test_runner::TestRunner;
use rstest::rstest;

use crate::common::fixture;

fn parse(text: &str) -> Result<Vec<u8>, Error> {
    parse_hex_text(text, Path::new("test.hex")).map(hexkit_core::ByteSequence::into_vec)
}

#[test]
fn test_parses_bytes_in_file_order() {
    assert_eq!(parse("DE AD BE EF\n").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn test_empty_text_is_empty_sequence() {
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn test_blank_and_whitespace_lines_are_skipped() {
    let text = "\n01\n   \n\t\n02 03\n\n";
    assert_eq!(parse(text).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_comment_ends_line() {
    assert_eq!(parse("01 02 # comment 03").unwrap(), vec![1, 2]);
}

#[test]
fn test_comment_only_affects_its_own_line() {
    let text = "# header\n01 #02\n03\n";
    assert_eq!(parse(text).unwrap(), vec![1, 3]);
}

#[test]
fn test_comment_token_needs_leading_hash() {
    let err = parse("01 02#x").unwrap_err();
    assert!(matches!(err, Error::Parse { ref token, .. } if token == "02#x"));
}

#[test]
fn test_crlf_and_lone_cr_separate_lines() {
    assert_eq!(parse("01 # a\r\n02\r03 # b\r04").unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn test_tabs_and_repeated_spaces_separate_tokens() {
    assert_eq!(parse("0A\t0B    0C").unwrap(), vec![0x0A, 0x0B, 0x0C]);
}

#[test]
fn test_information_separators_split_tokens() {
    let text = "01\u{1c}02\u{1d}03\u{1e}04\u{1f}05";
    assert_eq!(parse(text).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_unicode_whitespace_splits_tokens() {
    assert_eq!(parse("01\u{a0}02\u{3000}03\u{0b}04\u{0c}05").unwrap(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
#[case("\u{663}")]
#[case("\u{ff11}")]
#[case("\u{ff21}")]
fn test_non_ascii_digits_are_parse_errors(#[case] token: &str) {
    assert!(matches!(parse(token), Err(Error::Parse { .. })));
}

#[rstest]
#[case("0", 0x00)]
#[case("f", 0x0F)]
#[case("0f", 0x0F)]
#[case("FF", 0xFF)]
#[case("0xff", 0xFF)]
#[case("0X7f", 0x7F)]
#[case("00000001", 0x01)]
#[case("+10", 0x10)]
#[case("-0", 0x00)]
#[case("1_0", 0x10)]
fn test_single_token_values(#[case] token: &str, #[case] expected: u8) {
    assert_eq!(parse(token).unwrap(), vec![expected]);
}

#[rstest]
#[case("zz")]
#[case("0x")]
#[case("g1")]
#[case("_1")]
#[case("1_")]
#[case("0b1")]
#[case("1.0")]
fn test_invalid_tokens_are_parse_errors(#[case] token: &str) {
    let err = parse(&format!("01 {token} 02")).unwrap_err();
    assert!(
        matches!(err, Error::Parse { token: ref t, .. } if t == token),
        "unexpected error {err:?}"
    );
}

#[rstest]
#[case("0x100")]
#[case("100")]
#[case("FFF")]
#[case("-1")]
#[case("123456789abcdef0123456789abcdef")]
fn test_oversized_tokens_are_range_errors(#[case] token: &str) {
    let err = parse(token).unwrap_err();
    assert!(
        matches!(err, Error::Range { token: ref t, .. } if t == token),
        "unexpected error {err:?}"
    );
}

#[test]
fn test_first_bad_token_aborts_everything() {
    let err = parse("01 02\nzz 100\n03").unwrap_err();
    assert_eq!(err.token(), Some("zz"));
}

#[test]
fn test_every_in_range_token_round_trips() {
    let mut runner = TestRunner::default();
    runner
        .run(&(0u8..=255, any::<bool>(), 0usize..3), |(value, upper, padding)| {
            let digits = if upper {
                format!("{value:X}")
            } else {
                format!("{value:x}")
            };
            let token = format!("{}{digits}", "0".repeat(padding));
            prop_assert_eq!(parse(&token).unwrap(), vec![value]);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_read_hex_bytes_from_disk() {
    let file = fixture("blink.hex", "# blink firmware\n13 05 00 00\n6F 00 00 00 # loop\n");
    let bytes = read_hex_bytes(&file.path).unwrap();
    assert_eq!(bytes.as_slice(), &[0x13, 0x05, 0x00, 0x00, 0x6F, 0x00, 0x00, 0x00]);
}

#[test]
fn test_read_hex_bytes_errors_name_the_file() {
    let file = fixture("bad.hex", "01 zz\n");
    let err = read_hex_bytes(&file.path).unwrap_err();
    assert_eq!(err.path(), file.path.as_path());
    assert!(err.to_string().contains("bad.hex"));
}

#[test]
fn test_read_hex_bytes_missing_file_is_io_error() {
    let err = read_hex_bytes("definitely/not/here.hex").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_read_hex_bytes_rejects_invalid_utf8() {
    let file = fixture("binary.hex", [0x30u8, 0x31, 0xFF, 0xFE]);
    assert!(matches!(read_hex_bytes(&file.path), Err(Error::Io { .. })));
}
