use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

/// Relative closeness: `|a - b| <= tolerance * max(|a|, |b|)`.
///
/// Equal values are always close. A non-finite value is only close to an
/// identical one.
pub fn check_is_close(value_1: f64, value_2: f64, tolerance: f64) -> bool {
    if value_1 == value_2 {
        return true;
    }

    if !value_1.is_finite() || !value_2.is_finite() {
        return false;
    }

    let diff = (value_1 - value_2).abs();
    let max_val = value_1.abs().max(value_2.abs());

    diff <= max_val * tolerance
}

/// Parses a `Number` or `GroupedNumber` token into a real number. Thousands
/// separators are dropped before parsing. Values outside the `f64` range
/// (`1e999`) are rejected rather than turned into infinities.
pub fn token_to_f64(token: &Token) -> Result<f64, Error> {
    let parsed = match token.kind {
        TokenKind::GroupedNumber => token.value.replace(',', "").parse::<f64>(),
        _ => token.value.parse::<f64>(),
    };

    match parsed {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value.clone() },
            token.span.start,
        )),
    }
}
