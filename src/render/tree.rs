//! Plain-text tree using box-drawing characters, for terminals.

use crate::outline::Node;
use crate::render::Render;

/// Marker printed for a filler node.
pub const FILLER: &str = "┄";

/// Renders an outline as an indented box-drawing tree.
pub struct TreeRenderer;

impl Render for TreeRenderer {
    fn render(&self, root: &Node) -> String {
        let mut out = String::new();
        let mut open = Vec::new();
        write_nodes(&mut out, &root.children, 1, &mut open);
        out
    }
}

/// Generate box-drawing prefix for tree structure
fn tree_prefix(level: usize, is_last: bool, parent_states: &[bool]) -> String {
    if level == 0 {
        return String::new();
    }

    let mut prefix = String::new();

    // Vertical lines for ancestors that still have siblings below
    for i in 0..level.saturating_sub(1) {
        if i < parent_states.len() && parent_states[i] {
            prefix.push_str("│   ");
        } else {
            prefix.push_str("    ");
        }
    }

    if is_last {
        prefix.push_str("└── ");
    } else {
        prefix.push_str("├── ");
    }

    prefix
}

fn write_nodes(out: &mut String, nodes: &[Node], level: usize, open: &mut Vec<bool>) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i + 1 == nodes.len();
        out.push_str(&tree_prefix(level, is_last, open));
        match &node.entry {
            Some(entry) => {
                out.push_str(&entry.label);
                out.push_str(" (#");
                out.push_str(&entry.id);
                out.push(')');
            }
            None => out.push_str(FILLER),
        }
        out.push('\n');

        open.push(!is_last);
        write_nodes(out, &node.children, level + 1, open);
        open.pop();
    }
}
