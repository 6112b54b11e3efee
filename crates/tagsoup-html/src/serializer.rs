//! XML-style serializer.
//!
//! Writes every event back out as markup: attributes always double-quoted
//! using their escaped values, self-closing elements with a trailing `/`,
//! and the synthetic end tags the tokenizer inserted made explicit. The
//! result is well-formed in structure, though text is not entity-escaped.

use crate::sink::Sink;
use crate::tokenizer::Attribute;
use crate::tokenizer::event::write_start_tag;
use crate::{ParseResult, parse};

/// A [`Sink`] that accumulates serialized markup.
#[derive(Debug, Default, Clone)]
pub struct XmlSerializer {
    output: String,
}

impl XmlSerializer {
    /// Create a serializer with empty output.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// The markup written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consume the serializer and return its markup.
    #[must_use]
    pub fn into_string(self) -> String {
        self.output
    }
}

impl Sink for XmlSerializer {
    fn start(&mut self, name: &str, attributes: Vec<Attribute>, self_closing: bool) {
        // Writing into a String cannot fail.
        let _ = write_start_tag(&mut self.output, name, &attributes, self_closing);
    }

    fn end(&mut self, name: &str) {
        self.output.push_str("</");
        self.output.push_str(name);
        self.output.push('>');
    }

    fn chars(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn comment(&mut self, text: &str) {
        self.output.push_str("<!--");
        self.output.push_str(text);
        self.output.push_str("-->");
    }
}

/// Tokenizes `html` and returns its XML-style serialization.
///
/// # Errors
///
/// Returns [`crate::ParseError`] when the tokenizer stops making progress.
pub fn html_to_xml(html: &str) -> ParseResult<String> {
    parse(html, XmlSerializer::new()).map(XmlSerializer::into_string)
}
