//! The scanning engine.
//!
//! The scanner is stateless: [`Lexer::read_token`] is a pure function of a
//! byte offset, returning the next token at or after that offset. The parser
//! drives it by feeding back each token's end offset, which also makes
//! arbitrary lookahead free.

use std::sync::Arc;

use crate::error::Error;
use crate::lexer::token::{Token, TokenKind};
use crate::source::Source;

pub struct Lexer {
    source: Arc<Source>,
}

fn is_name_start(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphabetic()
}

fn is_name_char(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphanumeric()
}

impl Lexer {
    pub fn new(source: Arc<Source>) -> Self {
        Lexer { source }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// Returns the next token at or after `from`.
    pub fn read_token(&self, from: usize) -> Result<Token, Error> {
        let body = &self.source.body;
        let pos = self.position_after_whitespace(from);
        if pos >= body.len() {
            return Ok(Token {
                kind: TokenKind::Eof,
                start: body.len(),
                end: body.len(),
                value: String::new(),
            });
        }

        let c = body[pos];
        match c {
            b'!' => Ok(self.punctuation(TokenKind::Bang, pos)),
            b'?' => Ok(self.punctuation(TokenKind::Question, pos)),
            b'$' => Ok(self.punctuation(TokenKind::Dollar, pos)),
            b'(' => Ok(self.punctuation(TokenKind::ParenL, pos)),
            b')' => Ok(self.punctuation(TokenKind::ParenR, pos)),
            b':' => Ok(self.punctuation(TokenKind::Colon, pos)),
            b'=' => Ok(self.punctuation(TokenKind::Equals, pos)),
            b'@' => Ok(self.punctuation(TokenKind::At, pos)),
            b'[' => Ok(self.punctuation(TokenKind::BracketL, pos)),
            b']' => Ok(self.punctuation(TokenKind::BracketR, pos)),
            b'{' => Ok(self.punctuation(TokenKind::BraceL, pos)),
            b'}' => Ok(self.punctuation(TokenKind::BraceR, pos)),
            b'|' => Ok(self.punctuation(TokenKind::Pipe, pos)),
            b'&' => Ok(self.punctuation(TokenKind::Amp, pos)),
            b'*' => Ok(self.punctuation(TokenKind::Star, pos)),
            b'.' => {
                if body[pos..].starts_with(b"...") {
                    Ok(Token {
                        kind: TokenKind::Spread,
                        start: pos,
                        end: pos + 3,
                        value: String::new(),
                    })
                } else {
                    Err(self.unexpected_character(pos))
                }
            }
            b'"' => {
                if body[pos..].starts_with(b"\"\"\"") {
                    self.read_block_string(pos)
                } else {
                    self.read_string(pos)
                }
            }
            b'-' => self.read_number(pos),
            _ if c.is_ascii_digit() => self.read_number(pos),
            _ if is_name_start(c) => Ok(self.read_name(pos)),
            _ => Err(self.unexpected_character(pos)),
        }
    }

    fn punctuation(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            start,
            end: start + 1,
            value: String::new(),
        }
    }

    fn unexpected_character(&self, pos: usize) -> Error {
        let shown = String::from_utf8_lossy(&self.source.body[pos..pos + 1]).into_owned();
        Error::syntax(
            &self.source,
            pos,
            format!("Cannot parse the unexpected character \"{}\"", shown),
        )
    }

    /// Skips whitespace, commas, line terminators, the byte-order mark, and
    /// `#` line comments.
    fn position_after_whitespace(&self, from: usize) -> usize {
        let body = &self.source.body;
        let mut pos = from;
        while pos < body.len() {
            match body[pos] {
                0xEF if body[pos..].starts_with(&[0xEF, 0xBB, 0xBF]) => pos += 3,
                b' ' | b'\t' | b',' | b'\n' | b'\r' => pos += 1,
                b'#' => {
                    pos += 1;
                    while pos < body.len() && body[pos] != b'\n' && body[pos] != b'\r' {
                        pos += 1;
                    }
                }
                _ => break,
            }
        }
        pos
    }

    /// Reads an identifier, promoting it to an NS token when a `::`
    /// continuation follows.
    fn read_name(&self, start: usize) -> Token {
        let body = &self.source.body;
        let mut pos = start;
        while pos < body.len() && is_name_char(body[pos]) {
            pos += 1;
        }
        let mut kind = TokenKind::Name;
        while pos + 2 < body.len()
            && body[pos] == b':'
            && body[pos + 1] == b':'
            && is_name_start(body[pos + 2])
        {
            kind = TokenKind::Ns;
            pos += 2;
            while pos < body.len() && is_name_char(body[pos]) {
                pos += 1;
            }
        }
        Token {
            kind,
            start,
            end: pos,
            value: String::from_utf8_lossy(&body[start..pos]).into_owned(),
        }
    }

    /// Reads an integer or float following the JSON number grammar extended
    /// with a leading `-`. A `.` or exponent promotes the token to a float.
    fn read_number(&self, start: usize) -> Result<Token, Error> {
        let body = &self.source.body;
        let mut pos = start;
        let mut is_float = false;

        if body[pos] == b'-' {
            pos += 1;
        }
        if pos < body.len() && body[pos] == b'0' {
            pos += 1;
            if pos < body.len() && body[pos].is_ascii_digit() {
                return Err(Error::syntax(
                    &self.source,
                    pos,
                    format!(
                        "Invalid number, unexpected digit after 0: \"{}\"",
                        body[pos] as char
                    ),
                ));
            }
        } else {
            pos = self.read_digits(pos)?;
        }
        if pos < body.len() && body[pos] == b'.' {
            is_float = true;
            pos = self.read_digits(pos + 1)?;
        }
        if pos < body.len() && (body[pos] == b'e' || body[pos] == b'E') {
            is_float = true;
            pos += 1;
            if pos < body.len() && (body[pos] == b'+' || body[pos] == b'-') {
                pos += 1;
            }
            pos = self.read_digits(pos)?;
        }

        Ok(Token {
            kind: if is_float {
                TokenKind::Float
            } else {
                TokenKind::Int
            },
            start,
            end: pos,
            value: String::from_utf8_lossy(&body[start..pos]).into_owned(),
        })
    }

    /// Consumes one or more ASCII digits starting at `pos`.
    fn read_digits(&self, pos: usize) -> Result<usize, Error> {
        let body = &self.source.body;
        if pos >= body.len() || !body[pos].is_ascii_digit() {
            let found = if pos >= body.len() {
                "EOF".to_string()
            } else {
                format!("\"{}\"", body[pos] as char)
            };
            return Err(Error::syntax(
                &self.source,
                pos,
                format!("Invalid number, expected digit but got: {}", found),
            ));
        }
        let mut pos = pos;
        while pos < body.len() && body[pos].is_ascii_digit() {
            pos += 1;
        }
        Ok(pos)
    }

    /// Reads a single-line double-quoted string, resolving escapes.
    fn read_string(&self, start: usize) -> Result<Token, Error> {
        let body = &self.source.body;
        let mut pos = start + 1;
        let mut chunk_start = pos;
        let mut value: Vec<u8> = Vec::new();

        while pos < body.len() {
            let c = body[pos];
            match c {
                b'"' => {
                    value.extend_from_slice(&body[chunk_start..pos]);
                    return Ok(Token {
                        kind: TokenKind::String,
                        start,
                        end: pos + 1,
                        value: String::from_utf8_lossy(&value).into_owned(),
                    });
                }
                b'\n' | b'\r' => break,
                b'\\' => {
                    value.extend_from_slice(&body[chunk_start..pos]);
                    pos += 1;
                    if pos >= body.len() {
                        break;
                    }
                    match body[pos] {
                        b'"' => value.push(b'"'),
                        b'\\' => value.push(b'\\'),
                        b'/' => value.push(b'/'),
                        b'b' => value.push(0x08),
                        b'f' => value.push(0x0c),
                        b'n' => value.push(b'\n'),
                        b'r' => value.push(b'\r'),
                        b't' => value.push(b'\t'),
                        b'u' => {
                            let ch = self.read_unicode_escape(pos)?;
                            let mut buf = [0u8; 4];
                            value.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                            pos += 4;
                        }
                        other => {
                            return Err(Error::syntax(
                                &self.source,
                                pos,
                                format!("Invalid character escape sequence: \\{}", other as char),
                            ));
                        }
                    }
                    pos += 1;
                    chunk_start = pos;
                }
                _ if c < 0x20 && c != b'\t' => {
                    return Err(Error::syntax(
                        &self.source,
                        pos,
                        format!("Invalid character within String: {:?}", c as char),
                    ));
                }
                _ => pos += 1,
            }
        }

        Err(Error::syntax(&self.source, start, "Unterminated string"))
    }

    /// `pos` points at the `u` of a `\uXXXX` escape.
    fn read_unicode_escape(&self, pos: usize) -> Result<char, Error> {
        let body = &self.source.body;
        let invalid = |shown: String| {
            Error::syntax(
                &self.source,
                pos - 1,
                format!("Invalid character escape sequence: \\u{}", shown),
            )
        };
        if pos + 4 >= body.len() {
            let shown = String::from_utf8_lossy(&body[pos + 1..]).into_owned();
            return Err(invalid(shown));
        }
        let hex = &body[pos + 1..pos + 5];
        let shown = String::from_utf8_lossy(hex).into_owned();
        let code = std::str::from_utf8(hex)
            .ok()
            .and_then(|h| u32::from_str_radix(h, 16).ok())
            .ok_or_else(|| invalid(shown.clone()))?;
        char::from_u32(code).ok_or_else(|| invalid(shown))
    }

    /// Reads a triple-quoted block string. The body is literal except for
    /// the `\"""` escape; the dedent pass runs after scanning.
    fn read_block_string(&self, start: usize) -> Result<Token, Error> {
        let body = &self.source.body;
        let mut pos = start + 3;
        let mut chunk_start = pos;
        let mut raw: Vec<u8> = Vec::new();

        while pos < body.len() {
            if body[pos..].starts_with(b"\"\"\"") {
                raw.extend_from_slice(&body[chunk_start..pos]);
                return Ok(Token {
                    kind: TokenKind::BlockString,
                    start,
                    end: pos + 3,
                    value: block_string_value(&raw),
                });
            }
            if body[pos..].starts_with(b"\\\"\"\"") {
                raw.extend_from_slice(&body[chunk_start..pos]);
                raw.extend_from_slice(b"\"\"\"");
                pos += 4;
                chunk_start = pos;
                continue;
            }
            let c = body[pos];
            if c < 0x20 && c != b'\t' && c != b'\n' && c != b'\r' {
                return Err(Error::syntax(
                    &self.source,
                    pos,
                    format!("Invalid character within String: {:?}", c as char),
                ));
            }
            pos += 1;
        }

        Err(Error::syntax(&self.source, start, "Unterminated string"))
    }
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| c == ' ' || c == '\t')
}

/// Dedents a raw block-string body.
///
/// The common indentation of non-blank lines after the first is stripped
/// from every line, then leading and trailing blank lines are removed.
fn block_string_value(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw).into_owned();
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<&str> = normalized.split('\n').collect();

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        if indent < line.len() {
            common_indent = Some(common_indent.map_or(indent, |c| c.min(indent)));
        }
    }
    if let Some(indent) = common_indent {
        for line in lines.iter_mut().skip(1) {
            *line = line.get(indent..).unwrap_or("");
        }
    }

    let mut first = 0;
    while first < lines.len() && is_blank(lines[first]) {
        first += 1;
    }
    let mut last = lines.len();
    while last > first && is_blank(lines[last - 1]) {
        last -= 1;
    }

    lines[first..last].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedents_common_indentation() {
        let raw = b"\n    Hello,\n      World!\n\n    Yours,\n      Apex";
        assert_eq!(block_string_value(raw), "Hello,\n  World!\n\nYours,\n  Apex");
    }

    #[test]
    fn strips_leading_and_trailing_blank_lines() {
        let raw = b"\n\n  one\n  two\n   \n";
        assert_eq!(block_string_value(raw), "one\ntwo");
    }

    #[test]
    fn first_line_indentation_is_preserved() {
        let raw = b"  first\n    rest";
        assert_eq!(block_string_value(raw), "  first\nrest");
    }
}
