//! Finding documents and pulling outline entries out of them.
//!
//! Headings are located with the format's tree-sitter query, in document
//! order. A [`Selection`] then narrows them to the scanned region, drops the
//! excluded region and anything outside the depth range, and assigns each
//! survivor a unique anchor identifier.

use crate::entry::{Entry, Heading};
use crate::error::{OutlineError, Result};
use crate::formats::Format;
use crate::outline::DepthRange;
use crate::slug::{slugify, SlugRegistry};
use std::fmt;
use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tracing::{debug, warn};
use tree_sitter::{Parser, Query, QueryCursor};
use walkdir::WalkDir;

/// Expands `paths` into the documents to process.
///
/// Files are taken as given; directories are walked recursively for files whose
/// extension is listed in `extensions`. With no paths the working directory is
/// walked. Results from each directory are sorted by name.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for path in paths {
        if path.is_file() {
            documents.push(path);
            continue;
        }
        if !path.exists() {
            warn!(path = %path.display(), "skipping missing path");
            continue;
        }
        for entry in WalkDir::new(&path).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            let matches = entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext));
            if matches {
                documents.push(entry.into_path());
            }
        }
    }

    debug!(count = documents.len(), "found documents");
    Ok(documents)
}

/// Reads `path` and returns its headings in document order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn extract_headings(path: &Path, format: &dyn Format) -> Result<Vec<Heading>> {
    let source = fs::read_to_string(path)?;
    let headings = parse_headings(&source, format)?;
    debug!(path = %path.display(), headings = headings.len(), "extracted headings");
    Ok(headings)
}

/// Returns the headings of `source` in document order.
///
/// # Errors
///
/// Returns [`OutlineError::Parse`] if the grammar or the heading query cannot be loaded.
pub fn parse_headings(source: &str, format: &dyn Format) -> Result<Vec<Heading>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| OutlineError::Parse(e.to_string()))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| OutlineError::Parse("parser returned no tree".to_string()))?;
    let query = Query::new(&language, format.heading_query())
        .map_err(|e| OutlineError::Parse(format!("invalid heading query: {e}")))?;

    let mut headings = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(query_match) = matches.next() {
        for capture in query_match.captures {
            let node = capture.node;
            let Some(level) = format.heading_level(&node) else {
                continue;
            };
            let line = node.start_position().row + 1;
            let extent = source
                .get(node.start_byte()..node.end_byte())
                .unwrap_or_default()
                .trim_end();
            headings.push(Heading {
                title: format.heading_title(&node, source),
                level,
                line,
                end_line: line + extent.matches('\n').count(),
                byte_start: node.start_byte(),
                byte_end: node.end_byte(),
            });
        }
    }
    headings.sort_by_key(|h| h.byte_start);
    Ok(headings)
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A part of a document, addressed the way anchor links address it.
pub enum Region {
    /// Every heading in the document (`*`).
    Document,
    /// The section titled by the first heading with this slug (`#slug`).
    Anchor(String),
    /// No heading at all (the empty selector).
    Nowhere,
}

impl Region {
    /// Parses `*`, `#slug` or the empty selector.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::Config`] for any other selector.
    pub fn parse(selector: &str) -> Result<Self> {
        let selector = selector.trim();
        match selector {
            "" => Ok(Self::Nowhere),
            "*" => Ok(Self::Document),
            _ => match selector.strip_prefix('#') {
                Some(slug) if !slug.is_empty() => Ok(Self::Anchor(slug.to_string())),
                _ => Err(OutlineError::Config(format!(
                    "unsupported region selector '{selector}', expected '*' or '#slug'"
                ))),
            },
        }
    }

    /// Index of the heading titling an anchor region.
    #[must_use]
    pub fn locate(&self, headings: &[Heading]) -> Option<usize> {
        match self {
            Self::Anchor(slug) => headings.iter().position(|h| slugify(&h.title) == *slug),
            Self::Document | Self::Nowhere => None,
        }
    }

    /// Indices of the headings scanned when this region is the scan location.
    ///
    /// An anchor region covers the headings nested under its titling heading.
    #[must_use]
    pub fn scanned(&self, headings: &[Heading]) -> Range<usize> {
        match self {
            Self::Document => 0..headings.len(),
            Self::Nowhere => 0..0,
            Self::Anchor(_) => self
                .locate(headings)
                .and_then(|i| Heading::section_end(headings, i).map(|end| i + 1..end))
                .unwrap_or(0..0),
        }
    }

    /// Indices of the headings dropped when this region is the ignore location.
    ///
    /// An anchor region covers its titling heading and everything nested under it.
    #[must_use]
    pub fn excluded(&self, headings: &[Heading]) -> Range<usize> {
        match self {
            Self::Document => 0..headings.len(),
            Self::Nowhere => 0..0,
            Self::Anchor(_) => self
                .locate(headings)
                .and_then(|i| Heading::section_end(headings, i).map(|end| i..end))
                .unwrap_or(0..0),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => f.write_str("*"),
            Self::Anchor(slug) => write!(f, "#{slug}"),
            Self::Nowhere => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Which headings of a document become outline entries.
pub struct Selection {
    /// Accepted heading levels.
    pub range: DepthRange,
    /// Region whose headings are considered.
    pub scan: Region,
    /// Region whose headings are never listed.
    pub exclude: Region,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            range: DepthRange::default(),
            scan: Region::Document,
            exclude: Region::Anchor("page-outline".to_string()),
        }
    }
}

/// Turns `headings` into outline entries, in document order.
///
/// Identifiers are unique within the returned entries; repeated slugs get a
/// numeric suffix.
#[must_use]
pub fn collect_entries(headings: &[Heading], selection: &Selection) -> Vec<Entry> {
    let scanned = selection.scan.scanned(headings);
    let excluded = selection.exclude.excluded(headings);
    let mut registry = SlugRegistry::new();

    let entries: Vec<Entry> = headings
        .iter()
        .enumerate()
        .filter(|(i, h)| {
            scanned.contains(i) && !excluded.contains(i) && selection.range.contains(h.level)
        })
        .map(|(_, h)| Entry::new(h.level, registry.issue(&h.title), h.title.clone()))
        .collect();

    debug!(
        headings = headings.len(),
        scanned = scanned.len(),
        excluded = excluded.len(),
        entries = entries.len(),
        "collected entries"
    );
    entries
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
