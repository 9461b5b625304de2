//! Error types for the comparer.
//!
//! Only failures that make a comparison impossible are errors: a file that
//! cannot be opened or read, a tolerance that makes no sense, or a lexer
//! inconsistency. Two files that differ are a normal result, see
//! `comparer::comparer::Comparison`.

pub mod errors;
