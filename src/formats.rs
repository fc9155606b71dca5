//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats by providing the tree-sitter grammar and heading query
//! for each, plus how to read a level and a display label off a heading node.

pub mod markdown;

/// Knows how to find headings in one kind of document.
pub trait Format {
    /// Grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;

    /// Query capturing every heading node as `@heading`.
    fn heading_query(&self) -> &str;

    /// Level of a captured heading node (1 for the outermost), if it has one.
    fn heading_level(&self, node: &tree_sitter::Node<'_>) -> Option<usize>;

    /// Display label of a captured heading node, stripped of markup.
    fn heading_title(&self, node: &tree_sitter::Node<'_>, source: &str) -> String;
}
