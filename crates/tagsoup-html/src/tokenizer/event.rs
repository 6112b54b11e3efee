//! Events and attribute records produced by the tokenizer.

use core::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::attributes::escape_quotes;

/// An attribute on a start tag.
///
/// `value` is already resolved (quotes removed, escaped quotes decoded,
/// boolean attributes filled in). `escaped_value` is the same text made safe
/// for re-embedding between double quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute name as written in the source.
    pub name: String,
    /// Resolved value.
    pub value: String,
    /// `value` with every unescaped `"` turned into `\"`.
    pub escaped_value: String,
}

impl Attribute {
    /// Create an attribute, deriving `escaped_value` from `value`.
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            escaped_value: escape_quotes(value),
        }
    }
}

/// A structural event produced by the tokenizer, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Event {
    /// An element was opened.
    Start {
        /// Lowercase tag name.
        name: String,
        /// Attributes in source order, duplicates kept.
        attributes: Vec<Attribute>,
        /// Void element or explicit `/>`; no matching `End` follows.
        self_closing: bool,
    },
    /// An element was closed, explicitly or by auto-close.
    End {
        /// Lowercase tag name.
        name: String,
    },
    /// A run of text, possibly empty.
    Text {
        /// Text exactly as it appeared between tags.
        content: String,
    },
    /// A comment.
    Comment {
        /// Text between `<!--` and `-->`.
        content: String,
    },
}

/// The discriminant of an [`Event`], for summaries and colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    /// [`Event::Start`]
    Start,
    /// [`Event::End`]
    End,
    /// [`Event::Text`]
    Text,
    /// [`Event::Comment`]
    Comment,
}

impl Event {
    /// Which kind of event this is.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Start { .. } => EventKind::Start,
            Self::End { .. } => EventKind::End,
            Self::Text { .. } => EventKind::Text,
            Self::Comment { .. } => EventKind::Comment,
        }
    }

    /// The tag name for `Start` and `End` events.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Start { name, .. } | Self::End { name } => Some(name.as_str()),
            Self::Text { .. } | Self::Comment { .. } => None,
        }
    }
}

/// Writes `<name a="escaped"...>` (or `.../>` when self-closing).
pub(crate) fn write_start_tag(
    out: &mut impl fmt::Write,
    name: &str,
    attributes: &[Attribute],
    self_closing: bool,
) -> fmt::Result {
    write!(out, "<{name}")?;
    for attr in attributes {
        write!(out, " {}=\"{}\"", attr.name, attr.escaped_value)?;
    }
    if self_closing {
        write!(out, "/")?;
    }
    write!(out, ">")
}

/// Events display as the XML-style markup the serializer would write.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start {
                name,
                attributes,
                self_closing,
            } => write_start_tag(f, name, attributes, *self_closing),
            Self::End { name } => write!(f, "</{name}>"),
            Self::Text { content } => write!(f, "{content}"),
            Self::Comment { content } => write!(f, "<!--{content}-->"),
        }
    }
}
