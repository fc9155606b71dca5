//! The hierarchy builder turns a flat run of leveled entries into a nested outline.
//!
//! Construction is one forward pass over the entries. The builder keeps the chain
//! of open nodes from the root down to the latest entry, indexed by structural
//! level, and classifies every new entry against the depth of the previous one:
//!
//! ```text
//! Deeper    -> extend the chain, padding skipped levels with filler nodes
//! Shallower -> close (current - depth) levels, then continue as Same
//! Same      -> close the tip and open the new entry in its place
//! ```
//!
//! A node is attached to its parent when it is closed, so every parent owns its
//! children and sibling order is document order without back-pointers.

use crate::entry::Entry;
use crate::error::{OutlineError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Shallowest level accepted when nothing else is configured.
pub const DEFAULT_START_DEPTH: usize = 2;
/// Deepest level accepted when nothing else is configured.
pub const DEFAULT_END_DEPTH: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Inclusive band of heading levels an outline is built from.
pub struct DepthRange {
    start: usize,
    end: usize,
}

impl DepthRange {
    /// Creates the range `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::InvalidBounds`] if `start` is zero or greater than `end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start == 0 || start > end {
            return Err(OutlineError::InvalidBounds { start, end });
        }
        Ok(Self { start, end })
    }

    /// Shallowest accepted level.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Deepest accepted level.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether `depth` lies within the range.
    #[must_use]
    pub fn contains(&self, depth: usize) -> bool {
        (self.start..=self.end).contains(&depth)
    }

    /// Structural level of `depth` below the root; the start depth sits at level 1.
    #[must_use]
    pub fn level(&self, depth: usize) -> usize {
        (depth + 1).saturating_sub(self.start)
    }
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_DEPTH,
            end: DEFAULT_END_DEPTH,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// One node of a built outline.
///
/// The root and any filler inserted for a skipped level carry no entry; they
/// only hold a nested list.
pub struct Node {
    /// The entry this node lists, absent for the root and fillers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,
    /// Nested nodes in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// A node with no entry and no children.
    #[must_use]
    pub fn container() -> Self {
        Self::default()
    }

    /// A childless node listing `entry`.
    #[must_use]
    pub fn leaf(entry: Entry) -> Self {
        Self {
            entry: Some(entry),
            children: Vec::new(),
        }
    }

    /// True for nodes without an entry.
    #[must_use]
    pub fn is_filler(&self) -> bool {
        self.entry.is_none()
    }

    /// Entries below and including this node, in pre-order.
    #[must_use]
    pub fn entries(&self) -> Entries<'_> {
        Entries { stack: vec![self] }
    }

    /// Number of entry-bearing nodes in this subtree.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    /// Number of levels below this node; zero for a node without children.
    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Visits this subtree in pre-order, passing each node with its level relative to `self`.
    pub fn walk<F: FnMut(&Node, usize)>(&self, mut visit: F) {
        self.walk_from(0, &mut visit);
    }

    fn walk_from<F: FnMut(&Node, usize)>(&self, level: usize, visit: &mut F) {
        visit(self, level);
        for child in &self.children {
            child.walk_from(level + 1, visit);
        }
    }
}

/// Pre-order iterator over the entries of an outline, see [`Node::entries`].
pub struct Entries<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            self.stack.extend(node.children.iter().rev());
            if let Some(entry) = &node.entry {
                return Some(entry);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How an entry's depth relates to the depth of the entry before it.
pub enum Transition {
    /// The entry nests below the previous one.
    Deeper,
    /// The entry closes one or more levels.
    Shallower,
    /// The entry is the next sibling of the previous one.
    Same,
}

impl Transition {
    /// Classifies `depth` against the depth last materialised.
    #[must_use]
    pub fn classify(current: usize, depth: usize) -> Self {
        match depth.cmp(&current) {
            Ordering::Greater => Self::Deeper,
            Ordering::Less => Self::Shallower,
            Ordering::Equal => Self::Same,
        }
    }
}

/// Cursor over the outline under construction.
///
/// `open[0]` is the root and `open[k]` the open node at structural level `k`,
/// so `open.len()` is always the level of `current_depth` plus one.
struct BuildState {
    open: Vec<Node>,
    current_depth: usize,
    range: DepthRange,
}

impl BuildState {
    fn new(range: DepthRange) -> Self {
        Self {
            open: vec![Node::container()],
            current_depth: range.start() - 1,
            range,
        }
    }

    fn accept(&mut self, entry: Entry) {
        match Transition::classify(self.current_depth, entry.depth) {
            Transition::Deeper => self.descend(entry),
            Transition::Shallower => self.ascend(entry),
            Transition::Same => self.advance(entry),
        }
    }

    /// Opens filler nodes for every skipped level, then the entry itself.
    fn descend(&mut self, entry: Entry) {
        let level = self.range.level(entry.depth);
        trace!(depth = entry.depth, id = %entry.id, fillers = level - self.open.len(), "descend");
        while self.open.len() < level {
            self.open.push(Node::container());
        }
        self.open_entry(entry);
    }

    /// Walks up to the ancestor at the entry's level and continues after it.
    fn ascend(&mut self, entry: Entry) {
        trace!(depth = entry.depth, id = %entry.id, from = self.current_depth, "ascend");
        for _ in entry.depth..self.current_depth {
            self.close();
        }
        self.advance(entry);
    }

    /// Closes the tip of the chain and opens the entry as its next sibling.
    fn advance(&mut self, entry: Entry) {
        trace!(depth = entry.depth, id = %entry.id, "advance");
        self.close();
        self.open_entry(entry);
    }

    fn open_entry(&mut self, entry: Entry) {
        self.current_depth = entry.depth;
        self.open.push(Node::leaf(entry));
    }

    /// Attaches the tip of the chain to its parent; the root is never closed.
    fn close(&mut self) {
        if self.open.len() < 2 {
            return;
        }
        if let Some(node) = self.open.pop() {
            if let Some(parent) = self.open.last_mut() {
                parent.children.push(node);
            }
        }
    }

    fn finish(mut self) -> Node {
        while self.open.len() > 1 {
            self.close();
        }
        self.open.pop().unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Builds outlines for one depth range.
pub struct OutlineBuilder {
    range: DepthRange,
}

impl OutlineBuilder {
    /// Creates a builder accepting entries within `range`.
    #[must_use]
    pub fn new(range: DepthRange) -> Self {
        Self { range }
    }

    /// The depth range entries are checked against.
    #[must_use]
    pub fn range(&self) -> DepthRange {
        self.range
    }

    /// Consumes `entries` in order and returns the root of the outline.
    ///
    /// The root carries no entry. An empty input yields a root without children.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::InvalidEntry`] for an entry outside the depth range and
    /// [`OutlineError::DuplicateIdentifier`] for a repeated id. Nothing built so far is
    /// returned in either case.
    pub fn build<I>(&self, entries: I) -> Result<Node>
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut state = BuildState::new(self.range);
        let mut seen = HashSet::new();

        for entry in entries {
            self.validate(&entry)?;
            if !seen.insert(entry.id.clone()) {
                return Err(OutlineError::DuplicateIdentifier { id: entry.id });
            }
            state.accept(entry);
        }

        let root = state.finish();
        debug!(
            entries = seen.len(),
            height = root.height(),
            "built outline"
        );
        Ok(root)
    }

    fn validate(&self, entry: &Entry) -> Result<()> {
        let reason = if entry.depth == 0 {
            "depth must be at least 1".to_string()
        } else if !self.range.contains(entry.depth) {
            format!(
                "depth outside {}..={}",
                self.range.start(),
                self.range.end()
            )
        } else {
            return Ok(());
        };
        Err(OutlineError::InvalidEntry {
            depth: entry.depth,
            id: entry.id.clone(),
            reason,
        })
    }
}

/// Builds the outline for `entries` with the given depth range.
///
/// # Errors
///
/// See [`OutlineBuilder::build`].
pub fn build<I>(entries: I, range: DepthRange) -> Result<Node>
where
    I: IntoIterator<Item = Entry>,
{
    OutlineBuilder::new(range).build(entries)
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
