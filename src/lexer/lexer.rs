use crate::{
    comparer::comparer::Options,
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TOKEN_PATTERNS};

/// Returns the kind and text of the token starting at offset 0 of
/// `remaining`, trying the rules in priority order.
///
/// Only empty input yields `None`: every character is covered by one of the
/// rules.
pub fn lex(remaining: &str) -> Option<(TokenKind, &str)> {
    TOKEN_PATTERNS.iter().find_map(|pattern| {
        pattern
            .regex
            .find(remaining)
            .filter(|matched| matched.start() == 0 && !matched.is_empty())
            .map(|matched| (pattern.kind, matched.as_str()))
    })
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: u32,
    ignore_whitespace: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, line: u32, options: &Options) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line,
            ignore_whitespace: options.ignore_whitespace_tokens,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        if self.ignore_whitespace && token.kind == TokenKind::Whitespace {
            return;
        }

        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or_default()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position(&self, offset: usize) -> Position {
        Position(self.line, offset as u32)
    }
}

/// Splits one line into tokens.
///
/// Whitespace tokens are still consumed when `ignore_whitespace_tokens` is
/// set, they are just not returned.
pub fn tokenize(line: &str, line_number: u32, options: &Options) -> Result<Vec<Token>, Error> {
    let mut lex_state = Lexer::new(line, line_number, options);

    while !lex_state.at_eof() {
        let Some((kind, value)) = lex(lex_state.remainder()) else {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken { token: lex_state.at().to_string() },
                lex_state.position(lex_state.pos),
            ));
        };

        let span = Span {
            start: lex_state.position(lex_state.pos),
            end: lex_state.position(lex_state.pos + value.len()),
        };

        let token = MK_TOKEN!(kind, String::from(value), span);
        token.debug();

        lex_state.advance_n(token.value.len());
        lex_state.push(token);
    }

    Ok(lex_state.tokens)
}
