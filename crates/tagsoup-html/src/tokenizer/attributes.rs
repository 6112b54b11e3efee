//! Attribute parsing for start tags.
//!
//! The tokenizer hands over the raw text between the tag name and the
//! closing `>`; this module splits it into [`Attribute`] records. Anything
//! that cannot start an attribute name is skipped, so the parser never fails.

use super::event::Attribute;
use super::scan::{find_closing_quote, is_name_byte, scan_name, scan_unquoted, skip_space};
use crate::tables::FILL_ATTRIBUTES;

/// Parses `name`, `name=value`, `name="value"` and `name='value'` fragments
/// in left-to-right order. Duplicate names are kept.
///
/// Value resolution, first non-empty wins: double-quoted content,
/// single-quoted content, the unquoted token. Without a value, a fill
/// attribute such as `checked` takes its own name and anything else is empty.
#[must_use]
pub fn parse_attributes(fragment: &str) -> Vec<Attribute> {
    let bytes = fragment.as_bytes();
    let mut attributes = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_name_byte(bytes[pos]) {
            pos += 1;
            continue;
        }
        let name_end = scan_name(bytes, pos);
        let name = &fragment[pos..name_end];
        let (value, next) = match match_value(fragment, name_end) {
            Some((value, end)) => (Some(value), end),
            None => (None, name_end),
        };
        attributes.push(Attribute::new(name, &resolve_value(name, value)));
        pos = next;
    }

    attributes
}

/// `\s* = \s* VALUE` after an attribute name, returning the decoded value
/// and the offset just past it.
fn match_value(fragment: &str, name_end: usize) -> Option<(String, usize)> {
    let bytes = fragment.as_bytes();
    let eq = skip_space(bytes, name_end);
    if bytes.get(eq) != Some(&b'=') {
        return None;
    }
    let start = skip_space(bytes, eq + 1);

    if let Some(&quote @ (b'"' | b'\'')) = bytes.get(start)
        && let Some(close) = find_closing_quote(bytes, start + 1, quote)
    {
        let raw = &fragment[start + 1..close];
        return Some((unescape_quotes(raw, char::from(quote)), close + 1));
    }

    let end = scan_unquoted(bytes, start);
    (end > start).then(|| (fragment[start..end].to_string(), end))
}

/// Decodes `\<quote>` to `<quote>`; other escape pairs stay as written.
fn unescape_quotes(raw: &str, quote: char) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == quote => out.push(quote),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn resolve_value(name: &str, value: Option<String>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        // Names keep their source case, so `CHECKED` gets no fill value.
        _ if FILL_ATTRIBUTES.contains(name) => name.to_string(),
        _ => String::new(),
    }
}

/// Escapes every `"` that is not already preceded by a backslash, so the
/// value can be written between double quotes.
#[must_use]
pub fn escape_quotes(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev = None;
    for c in value.chars() {
        if c == '"' && prev != Some('\\') {
            out.push('\\');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
