//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an automenu.toml, and if present we load settings from there.
//! This provides the depth range, the scan, ignore and target regions, the scroll offset
//! handed to rendered menus, and file extension preferences.

use crate::error::{OutlineError, Result};
use crate::input::{Region, Selection};
use crate::outline::{DepthRange, DEFAULT_END_DEPTH, DEFAULT_START_DEPTH};
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// File read from the working directory when present.
pub const CONFIG_FILE: &str = "automenu.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from automenu.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_START_DEPTH)]
    /// Shallowest heading level listed (inclusive).
    pub start_depth: usize,
    #[facet(default = DEFAULT_END_DEPTH)]
    /// Deepest heading level listed (inclusive).
    pub end_depth: usize,
    #[facet(default = "*".to_string())]
    /// Region scanned for headings: `*` for the whole document or `#slug`.
    pub scan_region: String,
    #[facet(default = "#page-outline".to_string())]
    /// Region whose headings are never listed.
    pub exclude_region: String,
    #[facet(default = "#page-outline".to_string())]
    /// Section the outline is written into.
    pub target: String,
    #[facet(default = 40)]
    /// Pixels to scroll past a heading when a menu link is followed.
    pub scroll_offset: usize,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_depth: DEFAULT_START_DEPTH,
            end_depth: DEFAULT_END_DEPTH,
            scan_region: "*".to_string(),
            exclude_region: "#page-outline".to_string(),
            target: "#page-outline".to_string(),
            scroll_offset: 40,
            file_extensions: vec!["md".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from automenu.toml if present.
    ///
    /// A missing or unreadable file falls back to the defaults.
    pub fn load() -> Self {
        if !Path::new(CONFIG_FILE).exists() {
            return Self::default();
        }
        Self::load_from(Path::new(CONFIG_FILE)).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring {CONFIG_FILE}");
            Self::default()
        })
    }

    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = facet_toml::from_str::<Self>(&contents)
            .map_err(|e| OutlineError::Config(e.to_string()))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// The accepted depth band.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::InvalidBounds`] if the band is empty or starts at 0.
    pub fn depth_range(&self) -> Result<DepthRange> {
        DepthRange::new(self.start_depth, self.end_depth)
    }

    /// Which headings become outline entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the depth band or either region selector is invalid.
    pub fn selection(&self) -> Result<Selection> {
        Ok(Selection {
            range: self.depth_range()?,
            scan: Region::parse(&self.scan_region)?,
            exclude: Region::parse(&self.exclude_region)?,
        })
    }

    /// The section outlines are written into.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is not a `#slug` anchor.
    pub fn target_region(&self) -> Result<Region> {
        match Region::parse(&self.target)? {
            region @ Region::Anchor(_) => Ok(region),
            _ => Err(OutlineError::Config(format!(
                "target must be a '#slug' anchor, got '{}'",
                self.target
            ))),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
