//! Parser warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the tokenizer to report leniency repairs, such as an end tag that
//! closed nothing. The tokenizer clears the record when a parse starts, so
//! it only ever holds the warnings of the current document.

use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

thread_local! {
    /// Warnings already recorded on this thread (to deduplicate)
    static WARNED: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// When set, warnings are still recorded but never printed.
static QUIET: AtomicBool = AtomicBool::new(false);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a lenient repair (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Tokenizer", "discarded unmatched end tag </div>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED.with_borrow_mut(|set| set.insert(key(component, message)));

    if should_print && !QUIET.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[tagsoup {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if this exact warning has been recorded since the last clear.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED.with_borrow(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call before parsing a new document)
pub fn clear_warnings() {
    WARNED.with_borrow_mut(HashSet::clear);
}

/// Suppress (or re-enable) printing of warnings.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_is_recorded_once() {
        set_quiet(true);
        warn_once("Test", "recorded once");
        warn_once("Test", "recorded once");
        assert!(has_warned("Test", "recorded once"));
        assert!(!has_warned("Other", "recorded once"));
    }

    #[test]
    fn test_unknown_warning_is_not_recorded() {
        assert!(!has_warned("Test", "never emitted"));
    }

    #[test]
    fn test_clear_forgets_warnings() {
        set_quiet(true);
        warn_once("Test", "cleared");
        clear_warnings();
        assert!(!has_warned("Test", "cleared"));
    }

    #[test]
    fn test_warnings_are_per_thread() {
        set_quiet(true);
        warn_once("Test", "other thread");
        let seen = std::thread::spawn(|| has_warned("Test", "other thread"))
            .join()
            .unwrap();
        assert!(!seen);
    }
}
