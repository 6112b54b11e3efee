//! tagsoup CLI
//!
//! Tokenizes tag soup and prints the events, the repaired markup, or the
//! resulting document tree.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;
use tagsoup_common::warning::set_quiet;
use tagsoup_html::{Event, EventKind, html_to_xml, parse_document, tokenize};

/// tagsoup: lenient HTML tokenizer
#[derive(Parser, Debug)]
#[command(name = "tagsoup")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # List the events of a file
    tagsoup index.html

    # Repair markup into balanced XML-style output
    tagsoup --format xml index.html

    # Parse inline HTML
    tagsoup --html '<ul><li>one<li>two</ul>'

    # Read from stdin and dump the events as JSON
    cat index.html | tagsoup --format json -
"#)]
struct Cli {
    /// Path to an HTML file, or `-` for stdin
    #[arg(value_name = "FILE")]
    path: Option<String>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// What to print
    #[arg(short, long, value_enum, default_value_t = Format::Events)]
    format: Format,

    /// Do not print parser warnings
    #[arg(short, long)]
    quiet: bool,
}

/// Output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One colored line per event, then a summary
    Events,
    /// Markup with every element explicitly closed
    Xml,
    /// The document tree built from the events
    Tree,
    /// The event list as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    let html = read_input(&cli)?;

    match cli.format {
        Format::Events => {
            let events = tokenize(&html).context("failed to tokenize input")?;
            print_events(&events);
        }
        Format::Xml => {
            let xml = html_to_xml(&html).context("failed to tokenize input")?;
            println!("{xml}");
        }
        Format::Tree => {
            let tree = parse_document(&html).context("failed to build document tree")?;
            print!("{tree}");
        }
        Format::Json => {
            let events = tokenize(&html).context("failed to tokenize input")?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
    }

    Ok(())
}

/// Input comes from `--html`, a file, or stdin (no path or `-`).
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(html) = &cli.html {
        return Ok(html.clone());
    }

    match cli.path.as_deref() {
        None | Some("-") => {
            let mut buffer = String::new();
            let _ = io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read '{path}'")),
    }
}

/// Print one line per event, colored by kind, then per-kind counts.
fn print_events(events: &[Event]) {
    for event in events {
        let kind = format!("{:<8}", event.kind().to_string());
        match event {
            Event::Start { .. } => println!("{} {event}", kind.green()),
            Event::End { .. } => println!("{} {event}", kind.blue()),
            Event::Text { content } => println!("{} {content:?}", kind.white()),
            Event::Comment { .. } => println!("{} {event}", kind.dimmed()),
        }
    }

    let summary: Vec<String> = EventKind::iter()
        .map(|kind| {
            let count = events.iter().filter(|e| e.kind() == kind).count();
            format!("{count} {kind}")
        })
        .collect();
    println!("\n{}", summary.join(", ").bold());
}
