//! Asset list resolution.
//!
//! The asset list is a newline-delimited string. Each non-blank line is either
//! a bare path, whose file name becomes the display name, or `path|display name`.

use crate::error::AssetSpecError;
use std::path::{Path, PathBuf};

/// A local file to attach to a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    /// Path of the file on disk
    pub source_path: PathBuf,
    /// Name the asset is published under
    pub display_name: String,
}

impl ReleaseAsset {
    /// Create an asset with an explicit display name
    pub fn new(source_path: impl Into<PathBuf>, display_name: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            display_name: display_name.into(),
        }
    }
}

/// Resolve the configured asset list, preserving line order.
///
/// Blank lines are skipped. Line numbers in errors are 1-based and count blank
/// lines, so they match the configuration as written.
pub fn resolve_assets(config: &str) -> Result<Vec<ReleaseAsset>, AssetSpecError> {
    if config.trim().is_empty() {
        return Ok(Vec::new());
    }

    config
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_entry(index + 1, line.trim()))
        .collect()
}

fn parse_entry(line: usize, entry: &str) -> Result<ReleaseAsset, AssetSpecError> {
    let invalid = |reason: &str| AssetSpecError::InvalidAssetSpec {
        line,
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    let Some((path, display_name)) = entry.split_once('|') else {
        let display_name = Path::new(entry)
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid("path has no file name"))?;
        return Ok(ReleaseAsset::new(entry, display_name));
    };

    if display_name.contains('|') {
        return Err(invalid("expected at most one '|' separator"));
    }

    let (path, display_name) = (path.trim(), display_name.trim());
    if path.is_empty() {
        return Err(invalid("path before '|' is empty"));
    }
    if display_name.is_empty() {
        return Err(invalid("display name after '|' is empty"));
    }

    Ok(ReleaseAsset::new(path, display_name))
}
