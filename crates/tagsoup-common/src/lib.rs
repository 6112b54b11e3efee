//! Common utilities for the tagsoup parser.
//!
//! This crate provides shared infrastructure used by all tagsoup components:
//! - **Warning System** - deduplicated, colored diagnostics on stderr

pub mod warning;
