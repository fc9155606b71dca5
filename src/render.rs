//! Renderers turning a built outline into something a page can show.
//!
//! Every renderer follows the same contract: a node with an entry becomes a
//! list item linking to `#id` with the entry's label, and a node's children
//! become a nested list. Fillers get no list item of their own, only the
//! nested list.

pub mod html;
pub mod markdown;
pub mod tree;

use crate::config::Config;
use crate::error::Result;
use crate::outline::Node;
use clap::ValueEnum;

/// Turns an outline into text.
pub trait Render {
    /// Renders the outline below `root`; the root itself is never listed.
    fn render(&self, root: &Node) -> String;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
/// Output flavours understood by [`render`].
pub enum OutputFormat {
    /// Nested `<ul>` lists of anchor links.
    Html,
    /// Nested bullet list of markdown links.
    #[default]
    Markdown,
    /// Box-drawing tree for terminals.
    Tree,
    /// The outline itself as JSON.
    Json,
}

/// Renders `root` in `format`, taking renderer settings from `config`.
///
/// # Errors
///
/// Returns [`crate::error::OutlineError::Serialize`] if JSON output fails.
pub fn render(root: &Node, format: OutputFormat, config: &Config) -> Result<String> {
    let rendered = match format {
        OutputFormat::Html => html::HtmlRenderer {
            scroll_offset: config.scroll_offset,
        }
        .render(root),
        OutputFormat::Markdown => markdown::MarkdownRenderer.render(root),
        OutputFormat::Tree => tree::TreeRenderer.render(root),
        OutputFormat::Json => serde_json::to_string_pretty(root)? + "\n",
    };
    Ok(rendered)
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
