//! `.po` source parser.
//!
//! Turns the line-oriented gettext source format into a key/value mapping.
//! Only singular `msgid`/`msgstr` pairs are compiled; plural forms and
//! message contexts are skipped.

use std::{collections::BTreeMap, fmt};

use thiserror::Error;

/// Parsed contents of a `.po` source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoSource {
    /// Translations keyed by `msgid`, in ascending byte order.
    pub entries: BTreeMap<String, String>,
    /// Value of the empty `msgid`, if the file declared one.
    pub header: Option<String>,
}

impl PoSource {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnterminatedString,
    ExpectedString,
    InvalidEscape(char),
    TrailingCharacters,
    UnexpectedLine,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnterminatedString => write!(f, "unterminated string"),
            ParseErrorKind::ExpectedString => write!(f, "expected a quoted string"),
            ParseErrorKind::InvalidEscape(c) => write!(f, "invalid escape sequence '\\{}'", c),
            ParseErrorKind::TrailingCharacters => {
                write!(f, "unexpected characters after closing quote")
            }
            ParseErrorKind::UnexpectedLine => write!(f, "unrecognized line"),
        }
    }
}

/// A syntax error in a `.po` source, positioned for caret diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    /// The offending line, untrimmed.
    pub source_line: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Key,
    Value,
}

/// Accumulates the `msgid`/`msgstr` block currently being read.
#[derive(Debug)]
struct Accumulator {
    key: Option<String>,
    value: Option<String>,
    mode: Mode,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            key: None,
            value: None,
            mode: Mode::Idle,
        }
    }

    /// Move a complete pair into `source`. A key without a declared value is dropped.
    fn flush(&mut self, source: &mut PoSource) {
        let key = self.key.take();
        let value = self.value.take();
        if let (Some(key), Some(value)) = (key, value) {
            if key.is_empty() {
                source.header = Some(value);
            } else {
                source.entries.insert(key, value);
            }
        }
    }

    fn append(&mut self, text: &str) {
        let target = match self.mode {
            Mode::Key => self.key.as_mut(),
            Mode::Value => self.value.as_mut(),
            Mode::Idle => None,
        };
        if let Some(buffer) = target {
            buffer.push_str(text);
        }
    }
}

/// Parse `.po` source text.
///
/// # Example
///
/// ```
/// use pomo::core::po::parse_po;
///
/// let source = parse_po("msgid \"hello\"\nmsgstr \"hola\"\n").unwrap();
/// assert_eq!(source.entries.get("hello").map(String::as_str), Some("hola"));
/// ```
pub fn parse_po(content: &str) -> Result<PoSource, ParseError> {
    let mut source = PoSource::default();
    let mut acc = Accumulator::new();
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let position = Position {
            line: index + 1,
            raw: raw_line,
            // Column offset of the trimmed line within the raw line.
            indent: raw_line.chars().count() - raw_line.trim_start().chars().count(),
        };

        if line.starts_with('"') {
            let text = parse_quoted(line, 0, &position)?;
            acc.append(&text);
            continue;
        }

        let keyword_len = line
            .find(|c: char| c.is_whitespace() || c == '"')
            .unwrap_or(line.len());
        let keyword = &line[..keyword_len];
        let after_keyword = &line[keyword_len..];
        let rest_start = keyword_len + (after_keyword.len() - after_keyword.trim_start().len());

        match keyword {
            "msgid" => {
                let text = parse_quoted(line, rest_start, &position)?;
                acc.flush(&mut source);
                acc.key = Some(text);
                acc.mode = Mode::Key;
            }
            "msgstr" => {
                let text = parse_quoted(line, rest_start, &position)?;
                acc.value = Some(text);
                acc.mode = Mode::Value;
            }
            other if other.starts_with("msg") => {
                tracing::trace!(
                    line = position.line,
                    keyword = other,
                    "skipping unsupported keyword"
                );
                acc.mode = Mode::Idle;
            }
            _ => return Err(position.error(ParseErrorKind::UnexpectedLine, 0)),
        }
    }

    acc.flush(&mut source);
    Ok(source)
}

struct Position<'a> {
    line: usize,
    raw: &'a str,
    indent: usize,
}

impl Position<'_> {
    /// Build an error pointing at byte offset `at` of the trimmed line.
    fn error_at(&self, kind: ParseErrorKind, trimmed: &str, at: usize) -> ParseError {
        let column = self.indent + trimmed[..at.min(trimmed.len())].chars().count() + 1;
        ParseError {
            kind,
            line: self.line,
            column,
            source_line: self.raw.to_string(),
        }
    }

    fn error(&self, kind: ParseErrorKind, column_offset: usize) -> ParseError {
        ParseError {
            kind,
            line: self.line,
            column: self.indent + column_offset + 1,
            source_line: self.raw.to_string(),
        }
    }
}

/// Parse the quoted string starting at byte offset `start` of `line`.
///
/// Only whitespace or a `#` comment may follow the closing quote.
fn parse_quoted(line: &str, start: usize, position: &Position<'_>) -> Result<String, ParseError> {
    let rest = &line[start..];
    if !rest.starts_with('"') {
        return Err(position.error_at(ParseErrorKind::ExpectedString, line, start));
    }

    let mut text = String::new();
    let mut chars = rest.char_indices().skip(1);
    let mut closing = None;

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                closing = Some(offset);
                break;
            }
            '\\' => {
                let Some((escape_offset, escaped)) = chars.next() else {
                    break;
                };
                let unescaped = match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    'a' => '\u{07}',
                    'b' => '\u{08}',
                    'f' => '\u{0C}',
                    'v' => '\u{0B}',
                    '\\' | '"' | '\'' | '?' => escaped,
                    other => {
                        return Err(position.error_at(
                            ParseErrorKind::InvalidEscape(other),
                            line,
                            start + escape_offset - 1,
                        ));
                    }
                };
                text.push(unescaped);
            }
            _ => text.push(c),
        }
    }

    let Some(closing) = closing else {
        return Err(position.error_at(ParseErrorKind::UnterminatedString, line, start));
    };

    let after = start + closing + 1;
    let trailing = line[after..].trim_start();
    if !trailing.is_empty() && !trailing.starts_with('#') {
        let trailing_at = line.len() - trailing.len();
        return Err(position.error_at(ParseErrorKind::TrailingCharacters, line, trailing_at));
    }

    Ok(text)
}
