//! The tokenizing loop.
//!
//! Each iteration looks at the front of the remaining input, recognizes one
//! construct, reports it to the sink and advances. Markup is recognized in a
//! fixed order: comment, end tag, start tag. Anything else is text up to the
//! next `<`.

use tagsoup_common::warning::clear_warnings;

use super::scan::{
    COMMENT_CLOSE, COMMENT_OPEN, find_raw_text_end, match_end_tag, match_start_tag, strip_wrappers,
};
use super::stack::OpenElements;
use crate::sink::Sink;
use crate::tables::RAW_TEXT_ELEMENTS;
use crate::{ParseError, ParseResult};

/// Drives one parse of an in-memory buffer, pushing events into a [`Sink`].
///
/// The tokenizer owns its open-element stack; it is consumed by
/// [`HTMLTokenizer::run`], which hands the sink back on success.
pub struct HTMLTokenizer<'a, S: Sink> {
    input: &'a str,
    pos: usize,
    pub(super) stack: OpenElements,
    pub(super) sink: S,
}

impl<'a, S: Sink> HTMLTokenizer<'a, S> {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str, sink: S) -> Self {
        Self {
            input,
            pos: 0,
            stack: OpenElements::new(),
            sink,
        }
    }

    /// Tokenizes the whole buffer, then closes every element still open.
    ///
    /// Warnings recorded by an earlier parse on this thread are forgotten
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when an iteration cannot consume anything,
    /// such as an unterminated comment or a raw-text element without its
    /// end tag. Events already delivered to the sink are not retracted.
    pub fn run(mut self) -> ParseResult<S> {
        clear_warnings();

        while self.pos < self.input.len() {
            let before = self.pos;

            match self.raw_text_top() {
                Some(tag) => self.step_raw_text(&tag),
                None => self.step(),
            }

            if self.pos == before {
                return Err(ParseError {
                    remainder: self.input[before..].to_string(),
                    offset: before,
                });
            }
        }

        self.end_tag("");
        Ok(self.sink)
    }

    /// The unconsumed suffix of the input.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn raw_text_top(&self) -> Option<String> {
        self.stack
            .top()
            .filter(|top| RAW_TEXT_ELEMENTS.contains(top))
            .map(str::to_string)
    }

    /// One iteration outside raw-text content.
    fn step(&mut self) {
        let rest = self.remainder();

        if rest.starts_with(COMMENT_OPEN) {
            if let Some(end) = rest[COMMENT_OPEN.len()..].find(COMMENT_CLOSE) {
                let close = COMMENT_OPEN.len() + end;
                self.sink.comment(&rest[COMMENT_OPEN.len()..close]);
                self.pos += close + COMMENT_CLOSE.len();
                return;
            }
        } else if rest.starts_with("</") {
            if let Some(tag) = match_end_tag(rest) {
                self.pos += tag.len;
                self.end_tag(tag.name);
                return;
            }
        } else if let Some(tag) = match_start_tag(rest) {
            self.pos += tag.len;
            self.start_tag(tag.name, tag.attributes, tag.self_closing);
            return;
        }

        // Text runs up to the next '<'. An unrecognized '<' at the front gives
        // an empty run, which the caller reports as no progress.
        let text_len = rest.find('<').unwrap_or(rest.len());
        self.sink.chars(&rest[..text_len]);
        self.pos += text_len;
    }

    /// One iteration inside `<script>`, `<style>` and friends: everything up
    /// to the matching end tag is text.
    fn step_raw_text(&mut self, tag: &str) {
        let rest = self.remainder();
        let Some((start, end)) = find_raw_text_end(rest, tag) else {
            return;
        };

        self.sink.chars(&strip_wrappers(&rest[..start]));
        self.pos += end;
        self.end_tag(tag);
    }
}
