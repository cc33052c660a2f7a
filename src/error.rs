//! Errors raised while reading `.scene` files.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Everything that can go wrong between raw text and a [`crate::Scene`].
///
/// Errors found inside a nested block are wrapped in [`ParseError::InBlock`]
/// once per enclosing block, so the display of a deep failure reads like a
/// path: `in sphere (line 3): in phong_material (line 6): ...`.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("line {line}: expected {expected}, found `{found}`")]
    UnexpectedToken {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: malformed number `{token}`")]
    MalformedNumber { line: usize, token: String },

    #[error("line {line}: unknown {category} `{name}`")]
    UnknownBlock {
        line: usize,
        category: &'static str,
        name: String,
    },

    #[error("line {line}: `{field}` is not a field of {block}")]
    UnknownField {
        line: usize,
        block: String,
        field: String,
    },

    #[error("line {line}: {block} is missing required field `{field}`")]
    MissingField {
        line: usize,
        block: String,
        field: &'static str,
    },

    #[error("in {block} (line {line}): {source}")]
    InBlock {
        line: usize,
        block: String,
        #[source]
        source: Box<ParseError>,
    },

    #[error("can't read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    pub(crate) fn in_block(self, block: &str, line: usize) -> Self {
        ParseError::InBlock { line, block: block.to_string(), source: Box::new(self) }
    }

    /// Innermost error, with all block context peeled off.
    pub fn root_cause(&self) -> &ParseError {
        let mut error = self;
        while let ParseError::InBlock { source, .. } = error {
            error = source;
        }
        error
    }
}
