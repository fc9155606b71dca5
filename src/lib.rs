//! automenu: nested, linked outlines from document headings.
//!
//! Headings are pulled out of a document in order ([`input`]), filtered to a
//! depth band and region, and handed to the [`outline`] builder, which nests
//! them the way a reader expects a table of contents to nest. The resulting
//! tree is rendered by [`render`] and can be written back into the document
//! with an [`edit_plan`].

pub mod config;
pub mod edit_plan;
pub mod entry;
pub mod error;
pub mod formats;
pub mod input;
pub mod outline;
pub mod render;
pub mod slug;

pub use entry::Entry;
pub use error::{OutlineError, Result};
pub use outline::{build, DepthRange, Node, OutlineBuilder};

use formats::Format;
use input::Selection;

/// Parses `source`, selects its entries and builds their outline.
///
/// # Errors
///
/// Returns an error if the document cannot be parsed or the entries cannot be nested.
pub fn outline_document(source: &str, format: &dyn Format, selection: &Selection) -> Result<Node> {
    let headings = input::parse_headings(source, format)?;
    let entries = input::collect_entries(&headings, selection);
    build(entries, selection.range)
}

#[cfg(test)]
#[path = "tests/lib.rs"]
mod tests;
