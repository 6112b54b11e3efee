//! Property tests for the tokenizer.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use tagsoup_common::warning::set_quiet;
use tagsoup_html::tokenizer::parse_attributes;
use tagsoup_html::{Event, tokenize};

/// Markup pieces that always tokenize; shuffled together they make
/// unbalanced, overlapping documents.
const PIECES: &[&str] = &[
    "<p>",
    "</p>",
    "<div>",
    "</div>",
    "<b>",
    "</b>",
    "<i>",
    "</I>",
    "<ul>",
    "</ul>",
    "<li>",
    "<br>",
    "<img src=a.png>",
    "<span class=\"x\">",
    "</span>",
    "<table>",
    "<tr><td>",
    "</table>",
    "<hr/>",
    "text",
    " ",
    "<!-- c -->",
    "<script>a<b</script>",
    "</em>",
];

fn document(choices: &[u8]) -> String {
    choices
        .iter()
        .map(|&c| PIECES[usize::from(c) % PIECES.len()])
        .collect()
}

/// Every end closes the innermost open start, and nothing is left open.
fn well_nested(events: &[Event]) -> bool {
    let mut open: Vec<&str> = Vec::new();
    for event in events {
        match event {
            Event::Start {
                name,
                self_closing: false,
                ..
            } => open.push(name),
            Event::End { name } => {
                if open.pop() != Some(name.as_str()) {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}

#[quickcheck]
fn prop_generated_documents_parse(choices: Vec<u8>) -> bool {
    set_quiet(true);
    tokenize(&document(&choices)).is_ok()
}

#[quickcheck]
fn prop_events_are_well_nested(choices: Vec<u8>) -> bool {
    set_quiet(true);
    tokenize(&document(&choices)).is_ok_and(|events| well_nested(&events))
}

#[quickcheck]
fn prop_start_and_end_counts_match(choices: Vec<u8>) -> bool {
    set_quiet(true);
    let Ok(events) = tokenize(&document(&choices)) else {
        return false;
    };
    let starts = events
        .iter()
        .filter(|e| matches!(e, Event::Start { self_closing: false, .. }))
        .count();
    let ends = events
        .iter()
        .filter(|e| matches!(e, Event::End { .. }))
        .count();
    starts == ends
}

#[quickcheck]
fn prop_names_are_lowercase(choices: Vec<u8>) -> bool {
    set_quiet(true);
    tokenize(&document(&choices)).is_ok_and(|events| {
        events
            .iter()
            .filter_map(Event::tag_name)
            .all(|name| !name.chars().any(|c| c.is_ascii_uppercase()))
    })
}

#[quickcheck]
fn prop_arbitrary_input_never_panics(input: String) -> bool {
    set_quiet(true);
    match tokenize(&input) {
        Ok(events) => well_nested(&events),
        Err(err) => input.get(err.offset..) == Some(err.remainder.as_str()),
    }
}

#[quickcheck]
fn prop_attribute_parsing_is_total(fragment: String) -> bool {
    parse_attributes(&fragment)
        .iter()
        .all(|attr| !attr.name.is_empty())
}

#[quickcheck]
fn prop_escaped_value_round_trips(value: String) -> TestResult {
    if value.contains('\\') {
        return TestResult::discard();
    }
    let written = parse_attributes(&format!(" title=\"{}\"", value.replace('"', "\\\"")));
    let Some(attr) = written.first() else {
        return TestResult::failed();
    };
    let reparsed = parse_attributes(&format!(" title=\"{}\"", attr.escaped_value));
    TestResult::from_bool(
        attr.value == value && reparsed.first().is_some_and(|again| again.value == value),
    )
}
