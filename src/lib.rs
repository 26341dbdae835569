// Copyright © 2026 rdocsite Contributors. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # rdocsite Library
//!
//! rdocsite assembles the declarative site configuration consumed by the
//! external documentation-site generator for the R manuals: title,
//! description, document-head tags, theme flags, navigation links, and the
//! ordered sidebar. The record is built once, validated, and treated as
//! immutable thereafter.
//!
//! For more information, visit the [rdocsite documentation](https://docs.rs/rdocsite).

#![doc = include_str!("../README.md")]
#![doc(html_root_url = "https://docs.rs/rdocsite")]
#![crate_name = "rdocsite"]

/// Module containing core utilities, such as configuration and error handling.
pub mod core;

/// Provides command-line interface utilities.
pub mod cli;

/// Provides configuration emission utilities.
pub mod emit;

/// Provides the sidebar data-source seam.
pub mod sidebar;

pub use crate::core::config::{
    HeadTag, NavLink, SiteConfig, SiteConfigBuilder, ThemeConfig,
};
pub use crate::core::error::{Result, SiteConfigError};
pub use crate::emit::ConfigEmitter;
pub use crate::sidebar::{JsonFileSource, SidebarSource};

/// Assembles the default site configuration: the literal title,
/// description, favicon head tag, navigation links, and the seven-manual
/// sidebar.
///
/// Shorthand for `SiteConfigBuilder::new().build()`.
pub fn default_site_config() -> Result<SiteConfig> {
    SiteConfigBuilder::new().build()
}
