//! Anchor identifiers derived from heading text.
//!
//! A slug is the heading text lower-cased, with everything but ASCII word
//! characters and whitespace removed and whitespace runs joined by hyphens.
//! [`SlugRegistry`] hands out unique slugs within one document.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]+").expect("valid slug pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Fallback identifier for headings whose text leaves nothing behind.
pub const EMPTY_SLUG: &str = "section";

/// Derives the anchor identifier for `text`.
///
/// ```text
/// "Getting Started!"   -> "getting-started"
/// "  What's   new? "   -> "whats-new"
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    WHITESPACE.replace_all(stripped.trim(), "-").into_owned()
}

#[derive(Default)]
/// Tracks identifiers already issued so repeated headings get distinct anchors.
///
/// The first occurrence keeps the bare slug; later ones get `-1`, `-2` and so on.
pub struct SlugRegistry {
    issued: HashSet<String>,
}

impl SlugRegistry {
    #[must_use]
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slug for `text` that has not been issued before.
    pub fn issue(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = EMPTY_SLUG.to_string();
        }

        let mut candidate = base.clone();
        let mut suffix = 0;
        while self.issued.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}-{suffix}");
        }
        self.issued.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
