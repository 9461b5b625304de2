//! Lexical analysis for the comparer.
//!
//! Turns a single line of text into a sequence of tokens:
//!
//! - Words (identifiers, possibly containing digits)
//! - Numbers with thousands separators (`-1,595,226,615`)
//! - Plain decimal numbers with optional exponent (`-3.14e-10`)
//! - Runs of punctuation
//! - Runs of whitespace

pub mod lexer;
pub mod tokens;
