//! Markdown output: a nested bullet list of heading links.

use crate::outline::Node;
use crate::render::Render;
use std::fmt::Write;

/// Renders an outline as `- [label](#id)` bullets, two spaces per level.
///
/// A filler gets a bare `-` bullet, so each level sits exactly one step inside
/// the bullet above it and deep jumps stay a nested list.
pub struct MarkdownRenderer;

impl Render for MarkdownRenderer {
    fn render(&self, root: &Node) -> String {
        let mut out = String::new();
        write_items(&mut out, &root.children, 0);
        out
    }
}

fn write_items(out: &mut String, nodes: &[Node], depth: usize) {
    let pad = "  ".repeat(depth);
    for node in nodes {
        match &node.entry {
            Some(entry) => {
                let label = entry.label.replace('[', "\\[").replace(']', "\\]");
                let _ = writeln!(out, "{pad}- [{label}](#{})", entry.id);
            }
            None => {
                let _ = writeln!(out, "{pad}-");
            }
        }
        write_items(out, &node.children, depth + 1);
    }
}
