//! Source buffers and position mapping.
//!
//! A [`Source`] is a named byte buffer holding one Apex document. All
//! positions in the pipeline are byte offsets into the buffer; line and
//! column numbers are computed on demand by [`Source::location`] rather
//! than tracked during scanning.

use regex::bytes::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A named source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub name: String,
    #[serde(skip)]
    pub body: Vec<u8>,
}

/// A 1-based line/column pair derived from a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

fn line_terminators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n|[\n\r]").expect("line terminator pattern"))
}

impl Source {
    pub fn new(name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Source {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Maps a byte offset to its 1-based line and column.
    ///
    /// Counts the CR, LF, and CRLF terminators that appear before the
    /// offset; the column restarts after each terminator.
    pub fn location(&self, position: usize) -> SourceLocation {
        let mut line = 1;
        let mut column = position + 1;
        for m in line_terminators().find_iter(&self.body) {
            if m.start() >= position {
                break;
            }
            line += 1;
            column = position + 1 - m.end();
        }
        SourceLocation { line, column }
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new("", body.as_bytes().to_vec())
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new("", body.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_positions() {
        let source = Source::from("namespace \"x\"");
        assert_eq!(source.location(0), SourceLocation { line: 1, column: 1 });
        assert_eq!(source.location(10), SourceLocation { line: 1, column: 11 });
    }

    #[test]
    fn counts_lf_cr_and_crlf_terminators() {
        let source = Source::from("a\nb\rc\r\nd");
        assert_eq!(source.location(2), SourceLocation { line: 2, column: 1 });
        assert_eq!(source.location(4), SourceLocation { line: 3, column: 1 });
        assert_eq!(source.location(7), SourceLocation { line: 4, column: 1 });
    }

    #[test]
    fn offset_at_terminator_stays_on_its_line() {
        let source = Source::from("ab\ncd");
        assert_eq!(source.location(2), SourceLocation { line: 1, column: 3 });
    }
}
