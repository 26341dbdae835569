//! # Configuration Emission
//!
//! This module serialises the assembled [`SiteConfig`] record into the JSON
//! document the external site generator consumes, and writes it to disk.
//!
//! # Examples
//!
//! ```rust,no_run
//! use rdocsite::core::config::SiteConfigBuilder;
//! use rdocsite::emit::ConfigEmitter;
//! use std::path::Path;
//!
//! let config = SiteConfigBuilder::new().build().unwrap();
//! ConfigEmitter::new()
//!     .with_pretty_print(true)
//!     .write(&config, Path::new("out/config.json"))
//!     .unwrap();
//! ```

use std::fs;
use std::path::Path;

use log::info;

use crate::core::config::SiteConfig;
use crate::core::error::{Result, SiteConfigError};

/// Writes the assembled site configuration as JSON for the external
/// generator.
#[derive(Debug, Clone, Copy)]
pub struct ConfigEmitter {
    /// Enables formatted output with indentation.
    pretty_print: bool,
}

impl Default for ConfigEmitter {
    fn default() -> Self {
        Self { pretty_print: true }
    }
}

impl ConfigEmitter {
    /// Creates a new `ConfigEmitter` with default settings (pretty output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables pretty printing of the emitted JSON.
    pub fn with_pretty_print(mut self, enable: bool) -> Self {
        self.pretty_print = enable;
        self
    }

    /// Serialises the configuration to a JSON string.
    ///
    /// # Parameters
    /// - `config`: The assembled site configuration.
    ///
    /// # Returns
    /// - The JSON document, or a `SiteConfigError::Serialize` on failure.
    pub fn to_json(&self, config: &SiteConfig) -> Result<String> {
        let result = if self.pretty_print {
            serde_json::to_string_pretty(config)
        } else {
            serde_json::to_string(config)
        };

        result.map_err(|e| {
            SiteConfigError::serialize(format!(
                "Failed to serialise site configuration: {}",
                e
            ))
        })
    }

    /// Writes the serialised configuration to the given path, creating
    /// parent directories as needed.
    ///
    /// # Parameters
    /// - `config`: The assembled site configuration.
    /// - `path`: The output file path.
    ///
    /// # Returns
    /// - `Result<()>` - Indicates success, or an error if serialisation or
    ///   the write fails.
    pub fn write(
        &self,
        config: &SiteConfig,
        path: &Path,
    ) -> Result<()> {
        let json = self.to_json(config)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    SiteConfigError::io_error(parent.to_path_buf(), e)
                })?;
            }
        }

        fs::write(path, json).map_err(|e| {
            SiteConfigError::io_error(path.to_path_buf(), e)
        })?;

        info!("wrote site configuration to {}", path.display());
        Ok(())
    }
}
