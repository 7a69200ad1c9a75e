//! Structured pipeline errors.
//!
//! Every stage of the pipeline reports failures as [`Error`] values rather
//! than panicking or unwinding. An error carries a message, the byte
//! positions of the nodes involved, and the line/column pairs derived from
//! those positions, so the serialized form is self-contained:
//!
//! ```json
//! { "message": "...", "positions": [12], "locations": [{ "line": 2, "column": 3 }] }
//! ```

use serde::Serialize;
use std::fmt;

use crate::ast::Location;
use crate::source::{Source, SourceLocation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Error {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourceLocation>,
}

impl Error {
    /// An error with no position information.
    pub fn new(message: impl Into<String>) -> Self {
        Error {
            message: message.into(),
            positions: Vec::new(),
            locations: Vec::new(),
        }
    }

    /// A lexing or parsing failure at a single byte offset.
    pub fn syntax(source: &Source, position: usize, message: impl Into<String>) -> Self {
        Error {
            message: message.into(),
            positions: vec![position],
            locations: vec![source.location(position)],
        }
    }

    /// An error anchored to an AST node's location, when one was recorded.
    ///
    /// Line/column pairs are derived eagerly; a node parsed with the
    /// `no_source` option still yields a position but the column falls back
    /// to the raw offset.
    pub fn with_location(message: impl Into<String>, loc: Option<&Location>) -> Self {
        let message = message.into();
        match loc {
            Some(l) => {
                let location = match &l.source {
                    Some(source) => source.location(l.start),
                    None => SourceLocation {
                        line: 1,
                        column: l.start + 1,
                    },
                };
                Error {
                    message,
                    positions: vec![l.start],
                    locations: vec![location],
                }
            }
            None => Error::new(message),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(location) = self.locations.first() {
            write!(f, " ({}:{})", location.line, location.column)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
