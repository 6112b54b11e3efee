//! Grammar matchers for the tokenizer.
//!
//! Each matcher looks at the front of the remaining input and either
//! recognizes one construct, reporting how many bytes it covers, or returns
//! `None` so the caller can fall back to text. The grammar is ASCII-only, so
//! every slice boundary computed here lands on a `char` boundary.
//!
//! Start tag grammar, in pattern notation:
//!
//! ```text
//! <NAME ( \s+ NAME ( \s* = \s* ( "[^"]*" | '[^']*' | [^>\s]+ ) )? )* \s* /? >
//! ```

use std::borrow::Cow;
use std::collections::HashSet;

pub(super) const COMMENT_OPEN: &str = "<!--";
pub(super) const COMMENT_CLOSE: &str = "-->";
const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Characters allowed in tag and attribute names.
pub(super) const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':')
}

pub(super) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// End of the name run starting at `from` (equal to `from` if there is none).
pub(super) fn scan_name(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| !is_name_byte(b))
        .map_or(bytes.len(), |len| from + len)
}

pub(super) fn skip_space(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| !is_space(b))
        .map_or(bytes.len(), |len| from + len)
}

/// End of a `[^>\s]+` run starting at `from`.
pub(super) fn scan_unquoted(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&b| b == b'>' || is_space(b))
        .map_or(bytes.len(), |len| from + len)
}

/// Finds the quote that closes a value opened just before `from`.
///
/// A backslash escapes the character after it. If no unescaped quote
/// follows, the last escaped one closes the value instead.
pub(super) fn find_closing_quote(bytes: &[u8], from: usize, quote: u8) -> Option<usize> {
    let mut last_escaped = None;
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1).is_some_and(|&next| next != b'\n') => {
                if bytes[i + 1] == quote {
                    last_escaped = Some(i + 1);
                }
                i += 2;
            }
            b if b == quote => return Some(i),
            _ => i += 1,
        }
    }
    last_escaped
}

/// A recognized `</name ...>`.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct EndTagMatch<'a> {
    pub name: &'a str,
    pub len: usize,
}

/// `</NAME[^>]*>` at the start of `input`.
pub(super) fn match_end_tag(input: &str) -> Option<EndTagMatch<'_>> {
    let bytes = input.as_bytes();
    if !input.starts_with("</") {
        return None;
    }
    let name_end = scan_name(bytes, 2);
    if name_end == 2 {
        return None;
    }
    let close = name_end + input[name_end..].find('>')?;
    Some(EndTagMatch {
        name: &input[2..name_end],
        len: close + 1,
    })
}

/// A recognized start tag.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct StartTagMatch<'a> {
    pub name: &'a str,
    /// Raw text between the name and the closing `/>` or `>`.
    pub attributes: &'a str,
    pub self_closing: bool,
    pub len: usize,
}

/// Start tag at the start of `input`.
pub(super) fn match_start_tag(input: &str) -> Option<StartTagMatch<'_>> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }
    let name_end = scan_name(bytes, 1);
    if name_end == 1 {
        return None;
    }
    let mut scanner = StartTagScanner {
        bytes,
        failed: HashSet::new(),
    };
    let tail = scanner.attributes_from(name_end)?;
    Some(StartTagMatch {
        name: &input[1..name_end],
        attributes: &input[name_end..tail.attributes_end],
        self_closing: tail.self_closing,
        len: tail.end,
    })
}

struct TagTail {
    attributes_end: usize,
    self_closing: bool,
    end: usize,
}

/// Backtracking matcher for the attribute list of a start tag.
///
/// Whether the rest of a tag matches depends only on the position, so
/// positions that already failed are remembered and the scan stays linear.
/// Pending alternatives live on an explicit stack, so the attribute count of
/// a tag does not grow the call stack.
struct StartTagScanner<'a> {
    bytes: &'a [u8],
    failed: HashSet<usize>,
}

/// One position of the attribute list still being tried.
struct Frame {
    pos: usize,
    /// Positions after the next attribute, in the order they are tried.
    next: Vec<usize>,
    tried: usize,
}

impl StartTagScanner<'_> {
    fn attributes_from(&mut self, start: usize) -> Option<TagTail> {
        let mut frames = vec![self.frame(start)];

        while let Some(frame) = frames.last_mut() {
            if let Some(&next) = frame.next.get(frame.tried) {
                frame.tried += 1;
                if !self.failed.contains(&next) {
                    let frame = self.frame(next);
                    frames.push(frame);
                }
                continue;
            }

            // Another attribute is preferred; the terminator is the last resort.
            let pos = frame.pos;
            if let Some(tail) = self.terminator(pos) {
                return Some(tail);
            }
            let _ = self.failed.insert(pos);
            let _ = frames.pop();
        }
        None
    }

    fn frame(&self, pos: usize) -> Frame {
        Frame {
            pos,
            next: self.next_attribute(pos),
            tried: 0,
        }
    }

    /// Ends of `\s+ NAME (value)?` starting at `pos`: each value alternative
    /// first, then the bare name.
    fn next_attribute(&self, pos: usize) -> Vec<usize> {
        let name_start = skip_space(self.bytes, pos);
        if name_start == pos {
            return Vec::new();
        }
        let name_end = scan_name(self.bytes, name_start);
        if name_end == name_start {
            return Vec::new();
        }
        let mut ends = self.value_candidates(name_end);
        ends.push(name_end);
        ends
    }

    /// Possible ends of `\s* = \s* VALUE`, in the order the alternatives are
    /// tried: a quoted value honouring `\"` escapes, the plain quoted value,
    /// then an unquoted token.
    fn value_candidates(&self, name_end: usize) -> Vec<usize> {
        let bytes = self.bytes;
        let eq = skip_space(bytes, name_end);
        if bytes.get(eq) != Some(&b'=') {
            return Vec::new();
        }
        let start = skip_space(bytes, eq + 1);
        let mut candidates = Vec::with_capacity(3);
        if let Some(&quote @ (b'"' | b'\'')) = bytes.get(start) {
            if let Some(close) = find_closing_quote(bytes, start + 1, quote) {
                candidates.push(close + 1);
            }
            if let Some(len) = bytes[start + 1..].iter().position(|&b| b == quote)
                && !candidates.contains(&(start + 1 + len + 1))
            {
                candidates.push(start + 1 + len + 1);
            }
        }
        let unquoted_end = scan_unquoted(bytes, start);
        if unquoted_end > start {
            candidates.push(unquoted_end);
        }
        candidates
    }

    /// `\s* /? >`
    fn terminator(&self, pos: usize) -> Option<TagTail> {
        let mut at = skip_space(self.bytes, pos);
        let self_closing = self.bytes.get(at) == Some(&b'/');
        if self_closing {
            at += 1;
        }
        (self.bytes.get(at) == Some(&b'>')).then_some(TagTail {
            attributes_end: pos,
            self_closing,
            end: at + 1,
        })
    }
}

/// Finds the first `</tag ...>` in `input` (ASCII case-insensitive).
///
/// Returns the offset where the end tag starts and the offset just past it.
pub(super) fn find_raw_text_end(input: &str, tag: &str) -> Option<(usize, usize)> {
    let bytes = input.as_bytes();
    for (start, _) in input.match_indices("</") {
        let name_start = start + 2;
        let name_end = name_start + tag.len();
        let Some(candidate) = bytes.get(name_start..name_end) else {
            break;
        };
        if !candidate.eq_ignore_ascii_case(tag.as_bytes())
            || bytes.get(name_end).is_some_and(|&b| is_name_byte(b))
        {
            continue;
        }
        let close = name_end + input[name_end..].find('>')?;
        return Some((start, close + 1));
    }
    None
}

/// Replaces `<!--X-->` with `X`, then `<![CDATA[X]]>` with `X`.
pub(super) fn strip_wrappers(content: &str) -> Cow<'_, str> {
    match unwrap_all(content, COMMENT_OPEN, COMMENT_CLOSE) {
        Cow::Borrowed(text) => unwrap_all(text, CDATA_OPEN, CDATA_CLOSE),
        Cow::Owned(text) => Cow::Owned(unwrap_all(&text, CDATA_OPEN, CDATA_CLOSE).into_owned()),
    }
}

fn unwrap_all<'a>(text: &'a str, open: &str, close: &str) -> Cow<'a, str> {
    if !text.contains(open) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        let inner = &rest[start + open.len()..];
        let Some(end) = inner.find(close) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&inner[..end]);
        rest = &inner[end + close.len()..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}
