//! Records flowing from the extractor into the outline builder.
//!
//! A [`Heading`] is a heading located in a source document, with enough
//! coordinates to find its section again. An [`Entry`] is what survives
//! filtering: a depth, a unique anchor identifier and the text to display.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One heading accepted into the outline, in document order.
pub struct Entry {
    /// Heading level (1 for a top-level heading).
    pub depth: usize,
    /// Anchor identifier, unique across one outline.
    pub id: String,
    /// Display text, possibly empty.
    pub label: String,
}

impl Entry {
    #[must_use]
    /// Creates an entry from its parts.
    pub fn new(depth: usize, id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            depth,
            id: id.into(),
            label: label.into(),
        }
    }

    /// Link target for this entry, e.g. `#intro`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading found in a document, before any depth or region filtering.
pub struct Heading {
    /// Heading text without markup symbols.
    pub title: String,
    /// Heading level, 1 through 6.
    pub level: usize,
    /// Line the heading starts on (1-based).
    pub line: usize,
    /// Last line of the heading (1-based); the underline for setext headings.
    pub end_line: usize,
    /// Byte offset where the heading starts.
    pub byte_start: usize,
    /// Byte offset where the heading ends.
    pub byte_end: usize,
}

impl Heading {
    /// Index one past the last heading belonging to the section titled by `headings[index]`.
    ///
    /// A section runs until the next heading of the same or a shallower level.
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn section_end(headings: &[Heading], index: usize) -> Option<usize> {
        let level = headings.get(index)?.level;
        let end = headings
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, h)| h.level <= level)
            .map_or(headings.len(), |(i, _)| i);
        Some(end)
    }
}

#[cfg(test)]
#[path = "tests/entry.rs"]
mod tests;
