//! Lenient HTML tokenizer for the tagsoup toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** ([`tokenizer`]): a single pass over an in-memory buffer
//!   that reports start tags, end tags, text and comments to a [`Sink`]
//!   - Auto-close of inline elements inside a new block element
//!   - Auto-close of `<li>`, `<p>`, `<td>` and similar when repeated
//!   - Verbatim `<script>` and `<style>` content
//!   - Synthetic end tags for everything left open at end of input
//!
//! - **XML serializer** ([`serializer`]): echoes the events back as markup
//!
//! - **Tree builder** ([`dom_builder`]): builds a document tree through the
//!   [`DocumentTarget`] interface, implemented for [`tagsoup_dom::DomTree`]
//!
//! # Not Implemented
//!
//! - HTML5 tree-construction conformance (insertion modes, foster parenting)
//! - Character encoding detection and character references
//! - Streaming input

use thiserror::Error;

/// Tree builder driven by tokenizer events.
pub mod dom_builder;
/// XML-style echo of tokenizer events.
pub mod serializer;
/// The event-sink interface.
pub mod sink;
/// Element and attribute classification tables.
pub mod tables;
/// Lenient HTML tokenizer.
pub mod tokenizer;

pub use dom_builder::{DocumentTarget, DomBuilder, html_to_dom, parse_document};
pub use serializer::{XmlSerializer, html_to_xml};
pub use sink::Sink;
pub use tokenizer::{Attribute, Event, EventKind, HTMLTokenizer};

/// Longest remainder excerpt quoted in a [`ParseError`] message.
const PREVIEW_CHARS: usize = 40;

/// The tokenizer could not make progress.
///
/// Raised for an unterminated comment, a raw-text element without its end
/// tag, or a `<` that starts no recognizable markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at byte {offset}: {}", preview(.remainder))]
pub struct ParseError {
    /// The unconsumed input, starting at the construct that failed.
    pub remainder: String,
    /// Byte offset of `remainder` within the original input.
    pub offset: usize,
}

fn preview(remainder: &str) -> String {
    let mut chars = remainder.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head:?}...")
    } else {
        format!("{head:?}")
    }
}

/// Result alias for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Tokenizes `html`, pushing every event into `sink`, and returns the sink.
///
/// # Errors
///
/// Returns [`ParseError`] when the tokenizer stops making progress.
pub fn parse<S: Sink>(html: &str, sink: S) -> ParseResult<S> {
    HTMLTokenizer::new(html, sink).run()
}

/// Tokenizes `html` into a list of events.
///
/// # Errors
///
/// Returns [`ParseError`] when the tokenizer stops making progress.
pub fn tokenize(html: &str) -> ParseResult<Vec<Event>> {
    parse(html, Vec::new())
}
