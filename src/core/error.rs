//! # Error Handling for rdocsite
//!
//! This module defines custom error types for the rdocsite configuration
//! assembler. The `thiserror` crate is used to simplify error creation and
//! ensure consistent handling across the library.

use std::path::PathBuf;
use thiserror::Error;

/// A unified result type for the rdocsite library.
///
/// This type alias simplifies function signatures by defining a result type that always uses `SiteConfigError` as the error variant.
pub type Result<T> = std::result::Result<T, SiteConfigError>;

/// The main error type for rdocsite, encompassing all potential error cases.
///
/// `SiteConfigError` is an enumerated type that represents the different errors that can occur while assembling or emitting the site configuration. Each variant describes a specific error type with associated details.
#[derive(Error, Debug)]
pub enum SiteConfigError {
    /// Error raised when the external sidebar data source cannot be read or
    /// does not produce a well-formed ordered sequence of page paths.
    ///
    /// This error propagates immediately to the caller; there is no retry and
    /// no partially built configuration.
    #[error("Sidebar data source error: {message}.")]
    DataSource {
        /// Detailed description of the data-source failure.
        message: String,
        /// Optional path of the data-source file that caused the error.
        path: Option<PathBuf>,
    },

    /// Error related to configuration assembly or validation.
    ///
    /// This error occurs when an override file is malformed or a required
    /// field of the assembled record turns out empty.
    #[error("Configuration error: {message}.")]
    Config {
        /// Detailed description of the configuration error.
        message: String,
        /// Optional path of the file that caused the error.
        path: Option<PathBuf>,
    },

    /// Error encountered while serialising the assembled configuration.
    #[error("Serialisation error: {message}.")]
    Serialize {
        /// Detailed description of the serialisation error.
        message: String,
    },

    /// IO error encountered during file operations.
    ///
    /// This variant is used for errors encountered while reading source files
    /// or writing the emitted configuration.
    #[error("File IO error at `{path:?}`: {source}")]
    Io {
        /// Path associated with the IO error.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for SiteConfigError {
    /// Converts a standard IO error into a `SiteConfigError::Io`.
    ///
    /// # Parameters
    /// - `source`: The IO error encountered.
    ///
    /// # Returns
    /// - A `SiteConfigError::Io` with an empty path if no path is provided.
    fn from(source: std::io::Error) -> Self {
        SiteConfigError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

impl SiteConfigError {
    /// Creates a `DataSource` error with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the data-source failure.
    /// - `path`: Optional path of the data-source file causing the error.
    ///
    /// # Returns
    /// - A `SiteConfigError::DataSource` containing the message and optional path.
    pub fn data_source<S: Into<String>>(
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        SiteConfigError::DataSource {
            message: message.into(),
            path,
        }
    }

    /// Creates a `Config` error with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the configuration error.
    /// - `path`: Optional path of the file causing the error.
    ///
    /// # Returns
    /// - A `SiteConfigError::Config` containing the message and optional path.
    pub fn config<S: Into<String>>(
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        SiteConfigError::Config {
            message: message.into(),
            path,
        }
    }

    /// Creates a `Serialize` error with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the serialisation failure.
    ///
    /// # Returns
    /// - A `SiteConfigError::Serialize` with the provided message.
    pub fn serialize<S: Into<String>>(message: S) -> Self {
        SiteConfigError::Serialize {
            message: message.into(),
        }
    }

    /// Wraps an IO error as an `Io` variant with the specified path.
    ///
    /// # Parameters
    /// - `path`: The file path associated with the IO error.
    /// - `source`: The original IO error.
    ///
    /// # Returns
    /// - A `SiteConfigError::Io` with the specified path and source.
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        SiteConfigError::Io { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_display() {
        let err = SiteConfigError::data_source(
            "expected an array of strings",
            Some(PathBuf::from("sidebar.json")),
        );
        assert_eq!(
            err.to_string(),
            "Sidebar data source error: expected an array of strings."
        );
    }

    #[test]
    fn test_io_error_carries_path() {
        let source = std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        );
        let err = SiteConfigError::io_error(
            PathBuf::from("config.json"),
            source,
        );
        match err {
            SiteConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("config.json"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
