//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides the tree-sitter query for parsing markdown documents
//! and extracting heading structure from both ATX-style (`#` syntax) and
//! setext-style (underlined) headings.

use crate::formats::Format;
use regex::Regex;
use std::sync::LazyLock;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[([^\]]*)\]\([^)]*\)").expect("valid link pattern"));

/// Tree-sitter queries for markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "[(atx_heading) (setext_heading)] @heading"
    }

    fn heading_level(&self, node: &tree_sitter::Node<'_>) -> Option<usize> {
        let mut cursor = node.walk();
        let mut children = node.children(&mut cursor);
        children.find_map(|child| marker_level(child.kind()))
    }

    fn heading_title(&self, node: &tree_sitter::Node<'_>, source: &str) -> String {
        let content_kind = if node.kind() == "setext_heading" {
            "paragraph"
        } else {
            "inline"
        };
        let mut cursor = node.walk();
        let raw = node
            .named_children(&mut cursor)
            .find(|child| child.kind() == content_kind)
            .and_then(|child| child.utf8_text(source.as_bytes()).ok())
            .unwrap_or_default();
        plain_text(raw)
    }
}

/// Level encoded in a heading marker or underline node kind.
fn marker_level(kind: &str) -> Option<usize> {
    kind.strip_prefix("atx_h")
        .and_then(|rest| rest.strip_suffix("_marker"))
        .or_else(|| {
            kind.strip_prefix("setext_h")
                .and_then(|rest| rest.strip_suffix("_underline"))
        })
        .and_then(|digit| digit.parse().ok())
}

/// Heading text as a reader sees it: links reduced to their text, code and
/// emphasis markers dropped, a closing `#` sequence removed, whitespace collapsed.
#[must_use]
pub fn plain_text(raw: &str) -> String {
    let unlinked = LINK.replace_all(raw, "$1");
    let mut words: Vec<String> = unlinked
        .split_whitespace()
        .map(|word| {
            word.replace('`', "")
                .trim_matches(|c| matches!(c, '*' | '_' | '~'))
                .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect();
    if words.last().is_some_and(|w| w.chars().all(|c| c == '#')) {
        words.pop();
    }
    words.join(" ")
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
