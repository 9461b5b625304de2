#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::comparer::comparer::{Difference, Mismatch};

pub mod comparer;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use comparer::comparer::{Comparer, Comparison, Options};
pub use errors::errors::Error;

/// Line number (1-based) and byte column (0-based) inside that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32, pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0, 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Renders a difference as a report naming both inputs:
///
/// ```text
/// Mismatch: Number: 100 != 102
/// -> left.txt:4
///   |
/// 4 | total 100 items
///   |       ^^^
/// -> right.txt:4
///   |
/// 4 | total 102 items
///   |       ^^^
/// ```
pub fn render_difference(difference: &Difference, left_name: &str, right_name: &str) -> String {
    let mut out = String::new();
    let mismatch = &difference.mismatch;
    let line = mismatch.line();

    let _ = writeln!(out, "Mismatch: {}", mismatch);

    let (left_mark, right_mark) = match mismatch.tokens() {
        Some((left, right)) => (
            Some((left.span.start.1 as usize, left.span.end.1 as usize)),
            Some((right.span.start.1 as usize, right.span.end.1 as usize)),
        ),
        None => (None, None),
    };

    let (left_text, right_text) = match mismatch {
        Mismatch::LineCount { .. } => (
            non_empty_or_eof(&difference.left_line),
            non_empty_or_eof(&difference.right_line),
        ),
        _ => (difference.left_line.as_str(), difference.right_line.as_str()),
    };

    render_side(&mut out, left_name, line, left_text, left_mark);
    render_side(&mut out, right_name, line, right_text, right_mark);

    out
}

fn non_empty_or_eof(line: &str) -> &str {
    if line.is_empty() {
        "<end of input>"
    } else {
        line
    }
}

fn render_side(out: &mut String, name: &str, line: u32, text: &str, mark: Option<(usize, usize)>) {
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "-> {}:{}", name, line);
    let _ = writeln!(out, "{:>padding$}", "|");
    let _ = writeln!(out, "{} | {}", line_string, text.trim_end());

    if let Some((start, end)) = mark {
        let indent = caret_indent(text.get(..start).unwrap_or_default());
        let width = text.get(start..end).map_or(1, |token| token.chars().count()).max(1);

        let _ = writeln!(out, "{:>padding$} {}{}", "|", indent, "^".repeat(width));
    }
}

/// Blanks out `prefix` for the caret row, keeping tabs so the carets line
/// up with the text above them.
fn caret_indent(prefix: &str) -> String {
    prefix.chars().map(|c| if c == '\t' { '\t' } else { ' ' }).collect()
}
