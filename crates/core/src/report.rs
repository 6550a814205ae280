//! JUnit report parsing
//!
//! Only the document root is inspected: the `tests`, `failures` and
//! `disabled` attributes of `<testsuites>` (or whatever the root element
//! is). Nested `<testsuite>` elements are not aggregated.

use crate::error::BadgeError;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Read a report into UTF-8 text.
///
/// The encoding comes from the byte order mark or the XML declaration,
/// defaulting to UTF-8.
pub fn read_report(path: &Path) -> Result<String, BadgeError> {
    if !path.is_file() {
        return Err(BadgeError::ReportNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| BadgeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    decode_report(&bytes)
}

fn decode_report(bytes: &[u8]) -> Result<String, BadgeError> {
    let mut reader = Reader::from_reader(bytes);
    // The declaration is the first event; reading it settles the encoding.
    let _ = reader.read_event();
    let encoding = reader.decoder().encoding();

    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        let offset = text.find('\u{fffd}').unwrap_or(0);
        return Err(syntax_error(&text, offset));
    }

    Ok(text.into_owned())
}

/// Counts read from the root element of a JUnit report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub tests: i64,
    pub failures: i64,
    pub disabled: i64,
}

impl ReportSummary {
    pub fn new(tests: i64, failures: i64, disabled: i64) -> Self {
        Self {
            tests,
            failures,
            disabled,
        }
    }

    /// Tests that neither failed nor were disabled.
    ///
    /// Not clamped: an inconsistent report can yield a negative value.
    /// Computed in `i128` so any combination of counts fits.
    pub fn success(&self) -> i128 {
        i128::from(self.tests) - i128::from(self.failures) - i128::from(self.disabled)
    }

    /// Load and parse a report from disk
    pub fn from_file(path: &Path) -> Result<Self, BadgeError> {
        Self::parse(&read_report(path)?)
    }

    /// Parse a report from XML text
    pub fn parse(xml: &str) -> Result<Self, BadgeError> {
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        let attributes = root_attributes(xml)?;

        let lookup = |name: &str| {
            attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };

        let (Some(tests), Some(failures), Some(disabled)) =
            (lookup("tests"), lookup("failures"), lookup("disabled"))
        else {
            return Err(BadgeError::MissingCounts);
        };

        Ok(Self {
            tests: parse_count("tests", tests)?,
            failures: parse_count("failures", failures)?,
            disabled: parse_count("disabled", disabled)?,
        })
    }
}

fn parse_count(name: &'static str, value: &str) -> Result<i64, BadgeError> {
    value
        .trim()
        .parse()
        .map_err(|_| BadgeError::InvalidCount {
            name,
            value: value.to_string(),
        })
}

/// Walk the whole document to make sure it is well-formed, returning the
/// attributes of the root element. Attributes and text of every element
/// are decoded so bad entities and malformed attributes anywhere fail.
fn root_attributes(xml: &str) -> Result<Vec<(String, String)>, BadgeError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut root: Option<Vec<(String, String)>> = None;
    let mut root_closed = false;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(_) => return Err(syntax_error(xml, reader.buffer_position() as usize)),
        };
        let position = reader.buffer_position() as usize;

        match event {
            Event::Start(start) => {
                if root_closed {
                    return Err(syntax_error(xml, position));
                }
                let attributes = collect_attributes(&start, xml, position)?;
                if root.is_none() {
                    root = Some(attributes);
                }
                open.push(start.name().as_ref().to_vec());
            }
            Event::Empty(start) => {
                if root_closed {
                    return Err(syntax_error(xml, position));
                }
                let attributes = collect_attributes(&start, xml, position)?;
                if root.is_none() {
                    root = Some(attributes);
                    root_closed = true;
                }
            }
            Event::End(end) => {
                match open.pop() {
                    Some(name) if name == end.name().as_ref() => {}
                    _ => return Err(syntax_error(xml, position)),
                }
                if open.is_empty() {
                    root_closed = true;
                }
            }
            Event::Text(text) => {
                let text = std::str::from_utf8(&text)
                    .ok()
                    .and_then(|raw| unescape(raw).ok())
                    .ok_or_else(|| syntax_error(xml, position))?;
                if open.is_empty() && !text.trim().is_empty() {
                    return Err(syntax_error(xml, position));
                }
            }
            Event::CData(_) => {
                if open.is_empty() {
                    return Err(syntax_error(xml, position));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !open.is_empty() {
        return Err(syntax_error(xml, xml.len()));
    }

    root.ok_or_else(|| syntax_error(xml, xml.len()))
}

fn collect_attributes(
    start: &BytesStart<'_>,
    xml: &str,
    position: usize,
) -> Result<Vec<(String, String)>, BadgeError> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|_| syntax_error(xml, position))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = std::str::from_utf8(&attr.value)
            .ok()
            .and_then(|raw| unescape(raw).ok())
            .ok_or_else(|| syntax_error(xml, position))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(attributes)
}

/// Translate a byte offset into a 1-based line and 0-based column.
fn syntax_error(xml: &str, offset: usize) -> BadgeError {
    let consumed = &xml.as_bytes()[..offset.min(xml.len())];
    let line = consumed.iter().filter(|&&b| b == b'\n').count() + 1;
    let column = consumed.iter().rev().take_while(|&&b| b != b'\n').count();
    BadgeError::XmlSyntax { line, column }
}
