use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, info, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::tokenize, tokens::Token},
    Position,
};

use super::numeric::{check_is_close, token_to_f64};

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Drop whitespace tokens before comparing, so `a  b` equals `a b`.
    pub ignore_whitespace_tokens: bool,
}

impl Options {
    pub fn with_ignore_whitespace_tokens(mut self, ignore: bool) -> Self {
        self.ignore_whitespace_tokens = ignore;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The first point where two inputs stop being equivalent.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    /// One input ran out of lines; `longer` still had `line`.
    LineCount { line: u32, longer: Side },
    TokenCount { line: u32, left: usize, right: usize },
    Kind { left: Token, right: Token },
    /// Numbers further apart than the tolerance allows.
    Number { left: Token, right: Token },
    Text { left: Token, right: Token },
}

impl Mismatch {
    pub fn line(&self) -> u32 {
        match self {
            Mismatch::LineCount { line, .. } | Mismatch::TokenCount { line, .. } => *line,
            Mismatch::Kind { left, .. } | Mismatch::Number { left, .. } | Mismatch::Text { left, .. } => {
                left.span.start.0
            }
        }
    }

    /// The offending tokens, if the mismatch is about a single position.
    pub fn tokens(&self) -> Option<(&Token, &Token)> {
        match self {
            Mismatch::Kind { left, right } | Mismatch::Number { left, right } | Mismatch::Text { left, right } => {
                Some((left, right))
            }
            _ => None,
        }
    }
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mismatch::LineCount { line, longer } => {
                write!(f, "Lines: {} input has more lines, starting at line {}", longer, line)
            }
            Mismatch::TokenCount { left, right, .. } => write!(f, "Size: {} != {}", left, right),
            Mismatch::Kind { left, right } => write!(f, "Type: {} != {}", left.kind, right.kind),
            Mismatch::Number { left, right } => write!(f, "Number: {} != {}", left.value, right.value),
            Mismatch::Text { left, right } => write!(f, "Value: {} != {}", left.value, right.value),
        }
    }
}

/// A mismatch together with the two lines it was found on. For a
/// `LineCount` mismatch the exhausted side is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub mismatch: Mismatch,
    pub left_line: String,
    pub right_line: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Equal,
    Different(Difference),
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        matches!(self, Comparison::Equal)
    }

    pub fn difference(&self) -> Option<&Difference> {
        match self {
            Comparison::Equal => None,
            Comparison::Different(difference) => Some(difference),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Comparer {
    relative_tolerance: f64,
    options: Options,
}

impl Comparer {
    pub fn new(relative_tolerance: f64, options: Options) -> Result<Comparer, Error> {
        if !relative_tolerance.is_finite() || relative_tolerance < 0.0 {
            return Err(Error::new(
                ErrorImpl::InvalidTolerance { tolerance: relative_tolerance },
                Position::null(),
            ));
        }

        Ok(Comparer { relative_tolerance, options })
    }

    pub fn relative_tolerance(&self) -> f64 {
        self.relative_tolerance
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn compare_paths(&self, left: impl AsRef<Path>, right: impl AsRef<Path>) -> Result<Comparison, Error> {
        let left = open(left.as_ref())?;
        let right = open(right.as_ref())?;

        self.compare_streams(left, right)
    }

    /// Compares two line-oriented inputs in lock-step.
    ///
    /// Input must be UTF-8: a line that is not valid UTF-8 aborts with
    /// `ReadError` instead of being reported as a difference.
    pub fn compare_streams<L: BufRead, R: BufRead>(&self, mut left: L, mut right: R) -> Result<Comparison, Error> {
        let mut left_line = String::new();
        let mut right_line = String::new();
        let mut line_number: u32 = 0;

        loop {
            line_number = next_line_number(line_number);

            let left_read = read_line(&mut left, &mut left_line, Side::Left, line_number)?;
            let right_read = read_line(&mut right, &mut right_line, Side::Right, line_number)?;

            let longer = match (left_read, right_read) {
                (false, false) => break,
                (true, false) => Some(Side::Left),
                (false, true) => Some(Side::Right),
                (true, true) => None,
            };

            if let Some(longer) = longer {
                return Ok(self.different(
                    Mismatch::LineCount { line: line_number, longer },
                    &left_line,
                    &right_line,
                ));
            }

            debug!("Comparing line {}", line_number);

            if let Some(mismatch) = self.compare_lines(&left_line, &right_line, line_number)? {
                return Ok(self.different(mismatch, &left_line, &right_line));
            }
        }

        info!("Inputs are equivalent ({} lines, relative tolerance {})", line_number.saturating_sub(1), self.relative_tolerance);
        Ok(Comparison::Equal)
    }

    pub fn compare_lines(&self, left: &str, right: &str, line_number: u32) -> Result<Option<Mismatch>, Error> {
        let left_tokens = tokenize(left, line_number, &self.options)?;
        let right_tokens = tokenize(right, line_number, &self.options)?;

        trace!("left:  {:?}", left_tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>());
        trace!("right: {:?}", right_tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>());

        if left_tokens.len() != right_tokens.len() {
            return Ok(Some(Mismatch::TokenCount {
                line: line_number,
                left: left_tokens.len(),
                right: right_tokens.len(),
            }));
        }

        for (left_token, right_token) in left_tokens.into_iter().zip(right_tokens) {
            if let Some(mismatch) = self.compare_tokens(left_token, right_token)? {
                return Ok(Some(mismatch));
            }
        }

        Ok(None)
    }

    fn compare_tokens(&self, left: Token, right: Token) -> Result<Option<Mismatch>, Error> {
        if left.kind != right.kind {
            return Ok(Some(Mismatch::Kind { left, right }));
        }

        if left.kind.is_numeric() {
            let value_1 = token_to_f64(&left)?;
            let value_2 = token_to_f64(&right)?;

            if !check_is_close(value_1, value_2, self.relative_tolerance) {
                return Ok(Some(Mismatch::Number { left, right }));
            }
        } else if left.value != right.value {
            return Ok(Some(Mismatch::Text { left, right }));
        }

        Ok(None)
    }

    fn different(&self, mismatch: Mismatch, left_line: &str, right_line: &str) -> Comparison {
        warn!("Line {}: {}", mismatch.line(), mismatch);

        Comparison::Different(Difference {
            mismatch,
            left_line: left_line.to_string(),
            right_line: right_line.to_string(),
        })
    }
}

/// Line numbers stop at `u32::MAX` instead of wrapping.
pub(crate) fn next_line_number(line_number: u32) -> u32 {
    line_number.saturating_add(1)
}

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    File::open(path).map(BufReader::new).map_err(|err| {
        Error::new(
            ErrorImpl::FileOpenError {
                path: path.to_string_lossy().into_owned(),
                reason: err.to_string(),
            },
            Position::null(),
        )
    })
}

/// Reads the next line into `buf` without its trailing `\n`. Returns
/// `false` once the stream is exhausted, leaving `buf` empty.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut String, side: Side, line_number: u32) -> Result<bool, Error> {
    buf.clear();

    let read = reader.read_line(buf).map_err(|err| {
        Error::new(
            ErrorImpl::ReadError { side, reason: err.to_string() },
            Position(line_number, 0),
        )
    })?;

    if read == 0 {
        return Ok(false);
    }

    if buf.ends_with('\n') {
        buf.pop();
    }

    Ok(true)
}
