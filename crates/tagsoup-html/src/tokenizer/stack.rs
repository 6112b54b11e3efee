//! The stack of open elements and the auto-close rules built on it.

use tagsoup_common::warning::warn_once;

use super::attributes::parse_attributes;
use super::machine::HTMLTokenizer;
use crate::sink::Sink;
use crate::tables::{BLOCK_ELEMENTS, CLOSE_SELF_ELEMENTS, INLINE_ELEMENTS, VOID_ELEMENTS};

/// Lowercase names of the currently open, non-void elements.
/// The last entry is the innermost element.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OpenElements {
    names: Vec<String>,
}

impl OpenElements {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// The innermost open element.
    #[must_use]
    pub fn top(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    /// Open an element.
    pub fn push(&mut self, name: String) {
        self.names.push(name);
    }

    /// Position of the innermost entry named `name`, counted from the bottom.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().rposition(|open| open == name)
    }

    /// Removes the entries at `position` and above, returning them
    /// outermost first.
    pub fn split_off(&mut self, position: usize) -> Vec<String> {
        self.names.split_off(position)
    }
}

impl<S: Sink> HTMLTokenizer<'_, S> {
    /// Handles a start tag: auto-closes what the new element cannot live
    /// inside, opens it unless it is self-closing, and emits `start`.
    pub(super) fn start_tag(&mut self, name: &str, fragment: &str, explicit_self_closing: bool) {
        let name = name.to_ascii_lowercase();

        // Inline elements cannot contain block content.
        if BLOCK_ELEMENTS.contains(&name) {
            while let Some(top) = self.stack.top().filter(|top| INLINE_ELEMENTS.contains(top)) {
                let top = top.to_string();
                self.end_tag(&top);
            }
        }

        // <li>a<li>b: the second li closes the first.
        if CLOSE_SELF_ELEMENTS.contains(&name) && self.stack.top() == Some(name.as_str()) {
            self.end_tag(&name);
        }

        let self_closing = VOID_ELEMENTS.contains(&name) || explicit_self_closing;
        if !self_closing {
            self.stack.push(name.clone());
        }

        self.sink.start(&name, parse_attributes(fragment), self_closing);
    }

    /// Handles an end tag: closes the innermost open element with this name
    /// and everything opened inside it, innermost first.
    ///
    /// An empty name closes the whole stack. A name that is not open is
    /// ignored.
    pub(super) fn end_tag(&mut self, name: &str) {
        let name = name.to_ascii_lowercase();
        let position = if name.is_empty() {
            Some(0)
        } else {
            self.stack.position(&name)
        };

        let Some(position) = position else {
            warn_once("Tokenizer", &format!("discarded unmatched end tag </{name}>"));
            return;
        };

        for closed in self.stack.split_off(position).iter().rev() {
            self.sink.end(closed);
        }
    }
}
