use std::fmt::Display;

use thiserror::Error;

use crate::{comparer::comparer::Side, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::FileOpenError { .. } => "FileOpenError",
            ErrorImpl::ReadError { .. } => "ReadError",
            ErrorImpl::InvalidTolerance { .. } => "InvalidTolerance",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Token `{}` was lexed as a number but is not a valid real number",
                token
            )),
            ErrorImpl::FileOpenError { path, reason } => {
                ErrorTip::Suggestion(format!("Could not open file `{}`: {}", path, reason))
            }
            ErrorImpl::ReadError { side, reason } => {
                ErrorTip::Suggestion(format!("Reading the {} input failed: {}", side, reason))
            }
            ErrorImpl::InvalidTolerance { tolerance } => ErrorTip::Suggestion(format!(
                "Relative tolerance must be a finite number >= 0, got {}",
                tolerance
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.position.0 == 0 {
            write!(f, "{}", self.internal_error)
        } else {
            write!(f, "{} (line {}, column {})", self.internal_error, self.position.0, self.position.1)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("could not open file {path:?}: {reason}")]
    FileOpenError { path: String, reason: String },
    #[error("error reading {side} input: {reason}")]
    ReadError { side: Side, reason: String },
    #[error("invalid relative tolerance {tolerance}")]
    InvalidTolerance { tolerance: f64 },
}
