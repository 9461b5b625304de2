use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::{Span, MK_PATTERN};

pub struct TokenPattern {
    pub regex: Regex,
    pub kind: TokenKind,
}

lazy_static! {
    /// Token rules in priority order. Every pattern is anchored at the start
    /// of the remaining text, and the first rule that matches wins even when
    /// a later one would match more.
    pub static ref TOKEN_PATTERNS: Vec<TokenPattern> = vec![
        MK_PATTERN!(TokenKind::Word, r"[^\W0-9]\w*"),
        MK_PATTERN!(TokenKind::GroupedNumber, r"-?[0-9]{1,3}(?:,[0-9]{3})+(?:\.[0-9]+)?"),
        MK_PATTERN!(TokenKind::Number, r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?"),
        MK_PATTERN!(TokenKind::Symbol, r"[^\w\s]+"),
        MK_PATTERN!(TokenKind::Whitespace, r"\s+"),
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Word,
    GroupedNumber, // -1,595,226,615
    Number,        // -3.14e-10
    Symbol,
    Whitespace,
}

impl TokenKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::GroupedNumber)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}`", self.kind, self.value)
    }
}

impl Token {
    pub fn debug(&self) {
        log::trace!("{} ({}) at {}..{}", self.kind, self.value.escape_debug(), self.span.start.1, self.span.end.1);
    }
}
