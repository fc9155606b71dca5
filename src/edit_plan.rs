//! The edit plan writes rendered outlines into documents using textum patches.
//!
//! An outline lands in the body of a target section: the lines between the
//! target heading and the next heading of any level. Those lines are replaced
//! wholesale, so regenerating an outline overwrites the previous one.

use crate::entry::Heading;
use crate::error::{OutlineError, Result};
use crate::input::Region;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;
use std::path::Path;
use textum::{Boundary, BoundaryMode, Patch, PatchSet, Snippet, Target};
use tracing::{debug, info};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
/// Serialisable collection of file modifications for atomic application.
pub struct EditPlan {
    /// Individual section replacements grouped for batch processing.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Line range of a file and the text replacing it.
pub struct Edit {
    /// Target file path for this modification.
    pub file_name: String,
    /// First line replaced (0-based, inclusive).
    pub line_start: usize,
    /// Line where replacement stops (0-based, exclusive).
    pub line_end: usize,
    /// Text written in place of the range.
    pub content: String,
    /// Title of the section receiving the outline.
    pub item_name: String,
}

impl Edit {
    /// Builds the edit placing `rendered` into the section of `source` selected by `target`.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::TargetNotFound`] if no heading matches `target`.
    pub fn for_section(
        path: &Path,
        source: &str,
        headings: &[Heading],
        target: &Region,
        rendered: &str,
    ) -> Result<Self> {
        let index = target
            .locate(headings)
            .ok_or_else(|| OutlineError::TargetNotFound(target.to_string()))?;
        let heading = &headings[index];

        // Heading lines are 1-based, so `end_line` is the 0-based row after the heading.
        let line_start = heading.end_line;
        let line_end = headings
            .get(index + 1)
            .map_or_else(|| source.lines().count(), |next| next.line - 1);

        Ok(Self {
            file_name: path.to_string_lossy().to_string(),
            line_start,
            line_end: line_end.max(line_start),
            content: format!("\n{}\n\n", rendered.trim_end()),
            item_name: heading.title.clone(),
        })
    }
}

impl EditPlan {
    /// Apply all edits in the plan using textum patches.
    ///
    /// Groups edits by file and uses textum's `PatchSet` to apply all changes
    /// atomically per file. Each edit targets a line range and replaces the
    /// content between those lines with the rendered outline.
    ///
    /// # Errors
    ///
    /// Returns an error if file operations or patching fails.
    pub fn apply(&self) -> Result<()> {
        let mut file_groups: HashMap<String, Vec<&Edit>> = HashMap::new();

        for edit in &self.edits {
            file_groups
                .entry(edit.file_name.clone())
                .or_default()
                .push(edit);
        }

        for (file_name, edits) in file_groups {
            let mut patchset = PatchSet::new();

            for edit in edits {
                debug!(
                    file = %file_name,
                    section = %edit.item_name,
                    lines = ?(edit.line_start..edit.line_end),
                    "queueing outline patch"
                );
                let start = Boundary::new(Target::Line(edit.line_start), BoundaryMode::Include);
                let end = Boundary::new(Target::Line(edit.line_end), BoundaryMode::Exclude);
                let snippet = Snippet::Between { start, end };

                let patch = Patch {
                    file: file_name.clone(),
                    snippet,
                    replacement: edit.content.clone(),
                };

                patchset.add(patch);
            }

            let results = patchset
                .apply_to_files()
                .map_err(|e| io::Error::other(e.to_string()))?;

            if let Some(new_content) = results.get(&file_name) {
                std::fs::write(&file_name, new_content)?;
                info!(file = %file_name, "wrote outline");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
