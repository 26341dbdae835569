//! # Sidebar Data Source Module
//!
//! This module provides the seam to the external sidebar data source: an
//! ordered list of page paths that determines the site's navigation order.
//! The canonical provider is a JSON file containing a flat array of strings,
//! read synchronously once at configuration-build time.
//!
//! Any malformed source — missing file, invalid JSON, a document that is not
//! an array, or an element that is not a non-empty string — fails with
//! [`SiteConfigError::DataSource`] and never yields a partial list.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value as JsonValue;

use crate::core::error::{Result, SiteConfigError};

/// A provider of ordered sidebar page paths.
///
/// Implementations read their backing resource when [`entries`](Self::entries)
/// is called and must preserve the order of the underlying data exactly.
pub trait SidebarSource: Send + Sync + std::fmt::Debug {
    /// Produces the ordered list of sidebar page paths.
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - The ordered page paths, or a
    ///   `SiteConfigError::DataSource` if the source cannot be read or is
    ///   malformed.
    fn entries(&self) -> Result<Vec<String>>;
}

/// A sidebar source backed by a JSON file containing an array of strings.
///
/// ```json
/// ["/R-intro", "/R-lang"]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    /// The path of the JSON data file.
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a new `JsonFileSource` for the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SidebarSource for JsonFileSource {
    fn entries(&self) -> Result<Vec<String>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| {
                SiteConfigError::data_source(
                    format!("Failed to read sidebar file: {}", e),
                    Some(self.path.clone()),
                )
            })?;

        let value: JsonValue = serde_json::from_str(&content)
            .map_err(|e| {
                SiteConfigError::data_source(
                    format!("Failed to parse sidebar file: {}", e),
                    Some(self.path.clone()),
                )
            })?;

        let entries = parse_entries(&value).map_err(|message| {
            SiteConfigError::data_source(
                message,
                Some(self.path.clone()),
            )
        })?;

        debug!(
            "loaded {} sidebar entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }
}

/// Interprets a JSON document as an ordered list of non-empty page paths.
fn parse_entries(
    value: &JsonValue,
) -> std::result::Result<Vec<String>, String> {
    let items = value.as_array().ok_or_else(|| {
        "Expected a JSON array of page paths".to_string()
    })?;

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let entry = item.as_str().ok_or_else(|| {
            format!("Entry {} is not a string", index)
        })?;
        if entry.is_empty() {
            return Err(format!("Entry {} is empty", index));
        }
        entries.push(entry.to_string());
    }

    Ok(entries)
}
