//! Element and attribute classification tables.
//!
//! The groupings follow HTML 4.01: they drive auto-closing in the tokenizer
//! and never change at runtime. Every table is a sorted static slice, so
//! lookups are a binary search and no initialization or locking is needed.

/// An immutable, sorted set of lowercase names.
#[derive(Debug)]
pub struct NameSet(&'static [&'static str]);

impl NameSet {
    /// Returns true if `name` (already lowercased) is in the set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.binary_search_by(|probe| (*probe).cmp(name)).is_ok()
    }

    /// All names in the set, sorted.
    #[must_use]
    pub const fn names(&self) -> &'static [&'static str] {
        self.0
    }
}

/// Void ("empty") elements: they cannot have content and are never pushed
/// onto the open-element stack.
pub static VOID_ELEMENTS: NameSet = NameSet(&[
    "area", "base", "basefont", "br", "col", "embed", "frame", "hr", "img", "input", "isindex",
    "link", "meta", "param",
]);

/// Block elements. Opening one closes every open inline element above it.
pub static BLOCK_ELEMENTS: NameSet = NameSet(&[
    "address",
    "applet",
    "blockquote",
    "button",
    "center",
    "dd",
    "del",
    "dir",
    "div",
    "dl",
    "dt",
    "fieldset",
    "form",
    "frameset",
    "hr",
    "iframe",
    "ins",
    "isindex",
    "li",
    "map",
    "menu",
    "noframes",
    "noscript",
    "object",
    "ol",
    "p",
    "pre",
    "script",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
]);

/// Inline elements, which cannot contain block content.
pub static INLINE_ELEMENTS: NameSet = NameSet(&[
    "a", "abbr", "acronym", "applet", "b", "basefont", "bdo", "big", "br", "button", "cite",
    "code", "del", "dfn", "em", "font", "i", "iframe", "img", "input", "ins", "kbd", "label",
    "map", "object", "q", "s", "samp", "script", "select", "small", "span", "strike", "strong",
    "sub", "sup", "textarea", "tt", "u", "var",
]);

/// Elements that may be left open and close themselves when the same
/// element is opened again directly inside them (`<li>a<li>b`).
pub static CLOSE_SELF_ELEMENTS: NameSet = NameSet(&[
    "colgroup", "dd", "dt", "li", "option", "p", "td", "tfoot", "th", "thead", "tr",
]);

/// Boolean attributes whose value defaults to their own name
/// (`<input disabled>` means `disabled="disabled"`).
pub static FILL_ATTRIBUTES: NameSet = NameSet(&[
    "checked", "compact", "declare", "defer", "disabled", "ismap", "multiple", "nohref",
    "noresize", "noshade", "nowrap", "readonly", "selected",
]);

/// Raw-text elements: their content is passed through verbatim up to the
/// matching end tag.
pub static RAW_TEXT_ELEMENTS: NameSet = NameSet(&["script", "style"]);

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> [&'static NameSet; 6] {
        [
            &VOID_ELEMENTS,
            &BLOCK_ELEMENTS,
            &INLINE_ELEMENTS,
            &CLOSE_SELF_ELEMENTS,
            &FILL_ATTRIBUTES,
            &RAW_TEXT_ELEMENTS,
        ]
    }

    #[test]
    fn test_tables_are_sorted_and_unique() {
        for set in all() {
            assert!(
                set.names().windows(2).all(|pair| pair[0] < pair[1]),
                "unsorted table: {:?}",
                set.names()
            );
        }
    }

    #[test]
    fn test_tables_are_lowercase() {
        for set in all() {
            for name in set.names() {
                assert_eq!(*name, name.to_ascii_lowercase());
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert!(VOID_ELEMENTS.contains("br"));
        assert!(!VOID_ELEMENTS.contains("div"));
        assert!(BLOCK_ELEMENTS.contains("p"));
        assert!(INLINE_ELEMENTS.contains("span"));
        assert!(CLOSE_SELF_ELEMENTS.contains("li"));
        assert!(FILL_ATTRIBUTES.contains("checked"));
        assert!(RAW_TEXT_ELEMENTS.contains("style"));
        assert!(!RAW_TEXT_ELEMENTS.contains("textarea"));
    }

    #[test]
    fn test_void_elements_are_never_close_self() {
        for name in VOID_ELEMENTS.names() {
            assert!(!CLOSE_SELF_ELEMENTS.contains(name));
        }
    }
}
