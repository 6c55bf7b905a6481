//! Page text normalization.
//!
//! Cleans raw extracted page text before chunking:
//!
//! 1. Collapse whitespace runs (newlines, tabs) to one space
//! 2. Remove `Page <digits>` header/footer artifacts (any case)
//! 3. Drop symbols, keeping letters, digits, whitespace and
//!    `. , ! ? ; : ( ) - ' "`
//! 4. Remove standalone digit runs (isolated page numbers)
//! 5. Fold typographic quotes and apostrophes to ASCII
//! 6. Trim
//!
//! Quotes are folded while filtering symbols so that `“ ”` survive
//! as `"` instead of being dropped as non-punctuation.
//!
//! # Example
//!
//! ```
//! use pagechunk::ingest::normalize;
//!
//! let clean = normalize("This  is   a    test.   Page 42  ");
//! assert_eq!(clean, "This is a test.");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static PAGE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)page \d+").unwrap());

static STANDALONE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

const KEPT_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '-', '\'', '"'];

/// Stateless page text cleaner.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Clean one page of raw text. Never fails; empty in, empty out.
    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw)
    }
}

/// Clean raw page text.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`. Removing a
/// marker or a number can splice its neighbours into a new match, so
/// the cleaning pass is repeated until the text stops changing. After
/// the first pass every change strictly shortens the text, which
/// bounds the loop.
///
/// Standalone numbers are removed even when they are real content
/// (a year like `1999` on its own disappears). Digits attached to
/// letters, as in `COVID19` or `3rd`, are kept.
pub fn normalize(raw: &str) -> String {
    let mut current = clean_pass(raw);
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let unmarked = PAGE_MARKER.replace_all(&collapsed, "");

    let filtered: String = unmarked
        .chars()
        .map(fold_quote)
        .filter(|c| is_kept(*c))
        .collect();

    let without_numbers = STANDALONE_DIGITS.replace_all(&filtered, "");

    // Removals leave double spaces behind
    WHITESPACE
        .replace_all(&without_numbers, " ")
        .trim()
        .to_string()
}

fn fold_quote(c: char) -> char {
    match c {
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => '"',
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' => '\'',
        other => other,
    }
}

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c)
}
