//! Lenient HTML tokenizer.
//!
//! Converts an HTML buffer into start, end, text and comment events while
//! repairing unbalanced markup with a stack of open elements.

/// Attribute fragment parsing and quote escaping.
pub mod attributes;
/// Event and attribute records.
pub mod event;
/// The tokenizing loop.
pub mod machine;
mod scan;
/// Open-element stack and auto-close handling.
pub mod stack;

pub use attributes::{escape_quotes, parse_attributes};
pub use event::{Attribute, Event, EventKind};
pub use machine::HTMLTokenizer;
pub use stack::OpenElements;
