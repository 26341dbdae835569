/// The `config` module provides the site-configuration record and builder
pub mod config;

/// The `error` module provides error handling
pub mod error;
