//! Terminal rendering for CLI commands
//!
//! Colors are switched off by `colored` when `NO_COLOR` is set.
//! Status lines go to stderr so `--format json` keeps stdout parseable.

use serde::Serialize;
use std::time::Duration;

/// Styles used across command output
pub mod colors {
    use colored::{ColoredString, Colorize};

    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Document names and chunk ids
    pub fn source(s: &str) -> ColoredString {
        s.blue()
    }

    pub fn count(n: usize) -> ColoredString {
        n.to_string().yellow()
    }

    pub fn pages(s: &str) -> ColoredString {
        s.cyan()
    }

    pub fn done(s: &str) -> ColoredString {
        s.green()
    }

    pub fn warn(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn fail(s: &str) -> ColoredString {
        s.red().bold()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Elapsed time as `250ms`, `3.20s` or `2m 5.0s`
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1000 {
        return format!("{millis}ms");
    }

    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{secs:.2}s")
    } else {
        let mins = elapsed.as_secs() / 60;
        format!("{mins}m {:.1}s", secs - (mins * 60) as f64)
    }
}

/// Compact page list: `[1, 2, 3, 7]` becomes `1-3, 7`
pub fn format_pages(pages: &[u32]) -> String {
    let mut parts = Vec::new();
    let mut iter = pages.iter().copied().peekable();

    while let Some(first) = iter.next() {
        let mut last = first;
        while let Some(next) = iter.next_if(|&page| last.checked_add(1) == Some(page)) {
            last = next;
        }

        if first == last {
            parts.push(first.to_string());
        } else {
            parts.push(format!("{first}-{last}"));
        }
    }

    parts.join(", ")
}

/// First `max_chars` characters of `text`, with `...` if cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte, _)) => format!("{}...", &text[..byte]),
        None => text.to_string(),
    }
}

/// Pretty JSON on stdout
pub fn print_json<T: Serialize>(data: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn print_done(message: &str) {
    eprintln!("{}", colors::done(message));
}

pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warn("warning"), message);
}

/// One failed document
pub fn print_failure(source: &str, error: &str) {
    eprintln!("{} {}: {}", colors::fail("failed"), colors::source(source), error);
}
