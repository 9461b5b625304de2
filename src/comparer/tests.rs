//! Unit tests for the comparer module.

use super::{
    comparer::{next_line_number, Comparer, Comparison, Mismatch, Options, Side},
    numeric::{check_is_close, token_to_f64},
};
use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

fn compare(tolerance: f64, left: &str, right: &str) -> Comparison {
    compare_with(tolerance, Options::default(), left, right)
}

fn compare_with(tolerance: f64, options: Options, left: &str, right: &str) -> Comparison {
    Comparer::new(tolerance, options)
        .unwrap()
        .compare_streams(left.as_bytes(), right.as_bytes())
        .unwrap()
}

fn mismatch(comparison: Comparison) -> Mismatch {
    match comparison {
        Comparison::Different(difference) => difference.mismatch,
        Comparison::Equal => panic!("Expected a mismatch"),
    }
}

#[test]
fn test_is_close_relative() {
    assert!(check_is_close(100.0, 100.5, 0.01));
    assert!(!check_is_close(100.0, 102.0, 0.01));
    assert!(check_is_close(0.0, 0.0, 0.0));
    assert!(check_is_close(-5.0, -5.0, 0.0));
    assert!(!check_is_close(0.0, 1e-300, 0.5));
    assert!(check_is_close(f64::INFINITY, f64::INFINITY, 0.0));
}

#[test]
fn test_is_close_non_finite() {
    for t in [0.0, 0.01, 1.0] {
        assert!(check_is_close(f64::INFINITY, f64::INFINITY, t));
        assert!(!check_is_close(f64::NEG_INFINITY, f64::INFINITY, t));
        assert!(!check_is_close(f64::INFINITY, 5.0, t));
        assert!(!check_is_close(5.0, f64::NEG_INFINITY, t));
        assert!(!check_is_close(f64::NAN, f64::NAN, t));
        assert!(!check_is_close(f64::NAN, 1.0, t));
    }
}

#[test]
fn test_is_close_symmetric() {
    let values = [
        0.0,
        -0.0,
        1.0,
        -1.0,
        3.5,
        100.0,
        100.5,
        102.0,
        -1e-9,
        1e300,
        -f64::MAX,
        7.25e-12,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
    ];
    let tolerances = [0.0, 1e-9, 0.01, 0.5, 1.0, 2.0];

    for a in values {
        for b in values {
            for t in tolerances {
                assert_eq!(check_is_close(a, b, t), check_is_close(b, a, t), "{} {} {}", a, b, t);
            }
        }
    }
}

#[test]
fn test_token_to_f64() {
    let span = Span { start: Position(1, 0), end: Position(1, 0) };

    let grouped = Token { kind: TokenKind::GroupedNumber, value: "-1,595,226,615".to_string(), span };
    assert_eq!(token_to_f64(&grouped).unwrap(), -1_595_226_615.0);

    let plain = Token { kind: TokenKind::Number, value: "-3.14e-10".to_string(), span };
    assert_eq!(token_to_f64(&plain).unwrap(), -3.14e-10);
}

#[test]
fn test_token_to_f64_out_of_range() {
    let span = Span { start: Position(2, 5), end: Position(2, 10) };

    for value in ["1e999", "-1e999", "+.5e400"] {
        let token = Token { kind: TokenKind::Number, value: value.to_string(), span };
        let err = token_to_f64(&token).unwrap_err();
        assert_eq!(err.get_error_name(), "NumberParseError");
        assert_eq!(*err.get_position(), Position(2, 5));
    }
}

#[test]
fn test_token_to_f64_malformed() {
    let span = Span { start: Position(4, 2), end: Position(4, 7) };
    let token = Token { kind: TokenKind::Number, value: "1.2.3".to_string(), span };

    let err = token_to_f64(&token).unwrap_err();
    assert_eq!(err.get_error_name(), "NumberParseError");
    assert_eq!(*err.get_position(), Position(4, 2));
}

#[test]
fn test_exact_match_baseline() {
    assert!(compare(0.0, "3.0\n", "3.0\n").is_equal());

    match mismatch(compare(0.0, "3.0\n", "3.000001\n")) {
        Mismatch::Number { left, right } => {
            assert_eq!(left.value, "3.0");
            assert_eq!(right.value, "3.000001");
        }
        other => panic!("Expected number mismatch, got {:?}", other),
    }
}

#[test]
fn test_tolerant_numeric_match() {
    assert!(compare(0.01, "value 100\n", "value 100.5\n").is_equal());
    assert!(matches!(mismatch(compare(0.01, "value 100\n", "value 102\n")), Mismatch::Number { .. }));
}

#[test]
fn test_grouped_numbers_with_tolerance() {
    assert!(compare(1e-6, "-1,595,226,615\n", "-1,595,226,616\n").is_equal());

    match mismatch(compare(0.0, "-1,595,226,615\n", "-1,595,226,616\n")) {
        Mismatch::Number { left, right } => {
            assert_eq!(left.value, "-1,595,226,615");
            assert_eq!(right.value, "-1,595,226,616");
        }
        other => panic!("Expected number mismatch, got {:?}", other),
    }
}

#[test]
fn test_grouped_vs_plain_is_kind_mismatch() {
    match mismatch(compare(0.5, "1,000\n", "1000\n")) {
        Mismatch::Kind { left, right } => {
            assert_eq!(left.kind, TokenKind::GroupedNumber);
            assert_eq!(right.kind, TokenKind::Number);
        }
        other => panic!("Expected kind mismatch, got {:?}", other),
    }
}

#[test]
fn test_word_vs_number_is_kind_mismatch() {
    assert!(matches!(mismatch(compare(0.0, "abc 5\n", "abc x\n")), Mismatch::Kind { .. }));
}

#[test]
fn test_token_count_mismatch() {
    assert_eq!(
        mismatch(compare(0.0, "a b c\n", "a b\n")),
        Mismatch::TokenCount { line: 1, left: 5, right: 3 }
    );
}

#[test]
fn test_text_mismatch() {
    match mismatch(compare(0.0, "same\nfoo\n", "same\nbar\n")) {
        Mismatch::Text { left, right } => {
            assert_eq!(left.value, "foo");
            assert_eq!(right.value, "bar");
            assert_eq!(left.span.start.0, 2);
        }
        other => panic!("Expected text mismatch, got {:?}", other),
    }
}

#[test]
fn test_whitespace_option() {
    assert!(matches!(mismatch(compare(0.0, "a  b\n", "a b\n")), Mismatch::Text { .. }));

    let options = Options::default().with_ignore_whitespace_tokens(true);
    assert!(compare_with(0.0, options, "a  b\n", "a b\n").is_equal());
}

#[test]
fn test_carriage_return_is_whitespace() {
    assert!(matches!(mismatch(compare(0.0, "a\r\n", "a\n")), Mismatch::TokenCount { .. }));

    let options = Options::default().with_ignore_whitespace_tokens(true);
    assert!(compare_with(0.0, options, "a\r\n", "a\n").is_equal());
}

#[test]
fn test_end_of_input_symmetry() {
    assert_eq!(
        mismatch(compare(0.0, "a\nb\nc\n", "a\nb\n")),
        Mismatch::LineCount { line: 3, longer: Side::Left }
    );
    assert_eq!(
        mismatch(compare(0.0, "a\nb\n", "a\nb\nc\n")),
        Mismatch::LineCount { line: 3, longer: Side::Right }
    );
}

#[test]
fn test_missing_final_newline() {
    assert!(compare(0.0, "a\nb", "a\nb\n").is_equal());
}

#[test]
fn test_empty_inputs() {
    assert!(compare(0.0, "", "").is_equal());
    assert!(matches!(mismatch(compare(0.0, "", "\n")), Mismatch::LineCount { longer: Side::Right, .. }));
}

#[test]
fn test_first_mismatch_only() {
    let difference = match compare(0.0, "x 1\ny 2\nz 3\n", "x 1\ny 9\nz 8\n") {
        Comparison::Different(difference) => difference,
        Comparison::Equal => panic!("Expected a mismatch"),
    };

    assert_eq!(difference.mismatch.line(), 2);
    assert_eq!(difference.left_line, "y 2");
    assert_eq!(difference.right_line, "y 9");
}

#[test]
fn test_invalid_tolerance() {
    for tolerance in [-0.1, f64::NAN, f64::INFINITY] {
        let err = Comparer::new(tolerance, Options::default()).unwrap_err();
        assert_eq!(err.get_error_name(), "InvalidTolerance");
    }
}

#[test]
fn test_read_error_on_invalid_utf8() {
    let comparer = Comparer::new(0.0, Options::default()).unwrap();
    let err = comparer.compare_streams(&[0xffu8, b'\n'][..], "a\n".as_bytes()).unwrap_err();

    match err.get_impl() {
        ErrorImpl::ReadError { side, .. } => assert_eq!(*side, Side::Left),
        other => panic!("Expected read error, got {:?}", other),
    }
}

#[test]
fn test_comparer_is_reusable() {
    let comparer = Comparer::new(0.01, Options::default()).unwrap();

    for _ in 0..3 {
        assert!(comparer.compare_streams("1.0 ok\n".as_bytes(), "1.001 ok\n".as_bytes()).unwrap().is_equal());
    }
}

#[test]
fn test_overflowing_number_aborts_comparison() {
    let cases = [(0.01, "1e999\n", "5\n"), (0.01, "-1e999\n", "1e999\n"), (0.0, "1e999\n", "5\n"), (0.5, "x 5\n", "x 1e999\n")];

    for (tolerance, left, right) in cases {
        let comparer = Comparer::new(tolerance, Options::default()).unwrap();
        let err = comparer.compare_streams(left.as_bytes(), right.as_bytes()).unwrap_err();

        match err.get_impl() {
            ErrorImpl::NumberParseError { token } => assert!(token.ends_with("e999")),
            other => panic!("Expected number parse error, got {:?}", other),
        }
    }
}

#[test]
fn test_largest_finite_numbers_still_compare() {
    assert!(compare(0.0, "1.7976931348623157e308\n", "1.7976931348623157e308\n").is_equal());
    assert!(matches!(
        mismatch(compare(0.01, "-1.7976931348623157e308\n", "1.7976931348623157e308\n")),
        Mismatch::Number { .. }
    ));
}

#[test]
fn test_next_line_number_saturates() {
    assert_eq!(next_line_number(0), 1);
    assert_eq!(next_line_number(41), 42);
    assert_eq!(next_line_number(u32::MAX), u32::MAX);
}

#[test]
fn test_comparer_accessors() {
    let options = Options::default().with_ignore_whitespace_tokens(true);
    let comparer = Comparer::new(0.25, options).unwrap();

    assert_eq!(comparer.relative_tolerance(), 0.25);
    assert!(comparer.options().ignore_whitespace_tokens);
}
