//! Utility macros for the comparer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored token rule for the lexer table

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The span inside the line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a token rule whose regex only matches at the start of the input.
///
/// The pattern is wrapped in `\A(?:...)`, so a successful match always
/// begins at offset 0 of the remaining text.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Whitespace, r"\s+")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $regex:literal) => {
        TokenPattern {
            regex: Regex::new(concat!(r"\A(?:", $regex, ")")).unwrap(),
            kind: $kind,
        }
    };
}
