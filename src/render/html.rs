//! HTML output: nested `<ul>` lists of anchor links.

use crate::outline::Node;
use crate::render::Render;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Renders an outline as nested HTML lists.
///
/// The outermost list carries `class="automenu"` and the scroll offset as
/// `data-offset`, for whatever script handles link activation on the page.
pub struct HtmlRenderer {
    /// Pixels to scroll past a heading when a link is followed.
    pub scroll_offset: usize,
}

impl Render for HtmlRenderer {
    fn render(&self, root: &Node) -> String {
        if root.children.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<ul class=\"automenu\" data-offset=\"{}\">",
            self.scroll_offset
        );
        write_items(&mut out, &root.children, 1);
        out.push_str("</ul>\n");
        out
    }
}

fn write_list(out: &mut String, nodes: &[Node], depth: usize) {
    let pad = INDENT.repeat(depth);
    let _ = writeln!(out, "{pad}<ul>");
    write_items(out, nodes, depth + 1);
    let _ = writeln!(out, "{pad}</ul>");
}

fn write_items(out: &mut String, nodes: &[Node], depth: usize) {
    let pad = INDENT.repeat(depth);
    for node in nodes {
        let Some(entry) = &node.entry else {
            write_list(out, &node.children, depth);
            continue;
        };
        let _ = write!(
            out,
            "{pad}<li><a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(&entry.href()),
            encode_text(&entry.label)
        );
        if node.children.is_empty() {
            out.push_str("</li>\n");
        } else {
            out.push('\n');
            write_list(out, &node.children, depth + 1);
            let _ = writeln!(out, "{pad}</li>");
        }
    }
}
