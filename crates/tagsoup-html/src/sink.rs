//! The event-sink interface between the tokenizer and its consumers.

use crate::tokenizer::{Attribute, Event};

/// Receives tokenizer events in document order.
///
/// Every method has an empty default, so a sink only implements the events
/// it cares about.
pub trait Sink {
    /// An element was opened. `self_closing` is set for void elements and
    /// explicit `/>`; no [`Sink::end`] call follows those.
    fn start(&mut self, _name: &str, _attributes: Vec<Attribute>, _self_closing: bool) {}

    /// An element was closed, explicitly or by auto-close.
    fn end(&mut self, _name: &str) {}

    /// A run of text. May be empty.
    fn chars(&mut self, _text: &str) {}

    /// A comment, without its `<!--` and `-->` markers.
    fn comment(&mut self, _text: &str) {}
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn start(&mut self, name: &str, attributes: Vec<Attribute>, self_closing: bool) {
        (**self).start(name, attributes, self_closing);
    }

    fn end(&mut self, name: &str) {
        (**self).end(name);
    }

    fn chars(&mut self, text: &str) {
        (**self).chars(text);
    }

    fn comment(&mut self, text: &str) {
        (**self).comment(text);
    }
}

/// Collects every event, for callers that prefer a list to callbacks.
impl Sink for Vec<Event> {
    fn start(&mut self, name: &str, attributes: Vec<Attribute>, self_closing: bool) {
        self.push(Event::Start {
            name: name.to_string(),
            attributes,
            self_closing,
        });
    }

    fn end(&mut self, name: &str) {
        self.push(Event::End {
            name: name.to_string(),
        });
    }

    fn chars(&mut self, text: &str) {
        self.push(Event::Text {
            content: text.to_string(),
        });
    }

    fn comment(&mut self, text: &str) {
        self.push(Event::Comment {
            content: text.to_string(),
        });
    }
}
