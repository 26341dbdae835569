//! # Site Configuration Module
//!
//! Provides the typed site-configuration record for the R manuals
//! documentation site, together with a builder that assembles it from the
//! built-in defaults, an optional TOML override file, and an optional
//! external sidebar data source.
//!
//! The serialised shape of [`SiteConfig`] is dictated by the external
//! site generator and is matched key for key: `head` entries are emitted as
//! `["link", { ... }]` tuples and the theme record is emitted under the
//! `themeConfig` key.
//!
//! ## Example
//!
//! ```rust
//! use rdocsite::core::config::SiteConfigBuilder;
//!
//! let config = SiteConfigBuilder::new().build().unwrap();
//! assert_eq!(config.title, "R language");
//! assert_eq!(config.theme.sidebar.len(), 7);
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SiteConfigError};
use crate::sidebar::SidebarSource;

/// Display name of the documentation site.
pub const DEFAULT_TITLE: &str = "R language";

/// Short descriptive subtitle of the documentation site.
pub const DEFAULT_DESCRIPTION: &str = "introduction to R language";

/// Path of the favicon injected into the document head.
pub const DEFAULT_FAVICON: &str = "/logo.jpg";

/// The fixed default sidebar: the seven R manuals, in reading order.
///
/// Order is significant; it determines the navigation order rendered by the
/// external generator.
pub const DEFAULT_SIDEBAR: [&str; 7] = [
    "/R-intro",
    "/R-lang",
    "/R-data",
    "/R-admin",
    "/R-exts",
    "/R-ints",
    "/R-FAQ",
];

/// A single document-head declaration, such as the favicon link.
///
/// The external generator expects head entries as two-element tuples of tag
/// name and attribute map, e.g. `["link", {"rel": "icon", "href": "/logo.jpg"}]`,
/// so this type serialises to and from that tuple form rather than a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    /// The HTML tag name (e.g. `link`).
    pub tag: String,
    /// The tag attributes, keyed by attribute name.
    pub attrs: BTreeMap<String, String>,
}

impl HeadTag {
    /// Creates a new head tag with the given tag name and attributes.
    pub fn new<S: Into<String>>(
        tag: S,
        attrs: BTreeMap<String, String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attrs,
        }
    }

    /// Creates the favicon `link` declaration for the given icon path.
    ///
    /// # Parameters
    /// - `href`: The site-relative path of the icon file.
    ///
    /// # Returns
    /// - A `HeadTag` representing `<link rel="icon" href="...">`.
    pub fn favicon<S: Into<String>>(href: S) -> Self {
        let mut attrs = BTreeMap::new();
        _ = attrs.insert("rel".to_string(), "icon".to_string());
        _ = attrs.insert("href".to_string(), href.into());
        Self::new("link", attrs)
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        (&self.tag, &self.attrs).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HeadTag {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let (tag, attrs) =
            <(String, BTreeMap<String, String>)>::deserialize(
                deserializer,
            )?;
        Ok(Self { tag, attrs })
    }
}

/// A labelled navigation link shown in the site's top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// The visible label of the link.
    pub text: String,
    /// The target URL of the link.
    pub link: String,
}

impl NavLink {
    /// Creates a new navigation link with the given label and target URL.
    pub fn new<S: Into<String>>(text: S, link: S) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Theme settings of the site, serialised under the `themeConfig` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Render all page headers in the sidebar, not only the active page's.
    #[serde(rename = "displayAllHeaders")]
    pub display_all_headers: bool,

    /// Whether sidebar groups can be collapsed.
    // The generator spells this key "collapsable".
    #[serde(rename = "collapsable")]
    pub collapsible: bool,

    /// Ordered navigation-bar links.
    pub nav: Vec<NavLink>,

    /// Ordered sidebar page paths, defining navigation order and inclusion.
    pub sidebar: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            display_all_headers: true,
            collapsible: false,
            nav: default_nav(),
            sidebar: DEFAULT_SIDEBAR
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// The complete site-configuration record consumed by the external generator.
///
/// The record is assembled once by [`SiteConfigBuilder::build`] and treated as
/// immutable thereafter; it owns all of its data and carries no interior
/// mutability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name of the site.
    pub title: String,

    /// Short descriptive subtitle.
    pub description: String,

    /// Ordered document-head declarations (favicon et al.).
    pub head: Vec<HeadTag>,

    /// Theme settings, emitted under the generator's `themeConfig` key.
    #[serde(rename = "themeConfig")]
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    /// Creates the default site record: the literal title, description,
    /// favicon head tag, navigation links, and the seven-manual sidebar.
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            head: vec![HeadTag::favicon(DEFAULT_FAVICON)],
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validates the record, ensuring every consumed string field is
    /// non-empty.
    pub fn validate(&self) -> Result<()> {
        validate_config(self)
    }
}

/// Optional overrides loaded from a TOML site file.
///
/// Absent fields leave the built-in defaults untouched.
#[derive(Debug, Default, Deserialize)]
struct SiteOverrides {
    title: Option<String>,
    description: Option<String>,
    #[serde(default)]
    nav: Vec<NavLink>,
}

/// The sidebar override selected on the builder, if any.
#[derive(Debug)]
enum SidebarOverride {
    /// A programmatically supplied ordered list of page paths.
    Inline(Vec<String>),
    /// An external data source read at build time.
    Source(Box<dyn SidebarSource>),
}

/// Builds a [`SiteConfig`] from defaults plus optional overrides.
///
/// Both historical variants of the configuration — one with an inline literal
/// sidebar, one delegating to an external data file — are expressed through
/// this single builder: leave the sidebar unset for the literal default list,
/// or supply an override.
#[derive(Debug, Default)]
pub struct SiteConfigBuilder {
    site_file: Option<PathBuf>,
    sidebar: Option<SidebarOverride>,
}

impl SiteConfigBuilder {
    /// Initialises a new `SiteConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a TOML site file whose fields override the default title,
    /// description, and navigation links.
    ///
    /// # Parameters
    /// - `path`: The path to the TOML override file.
    pub fn with_site_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.site_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the sidebar with a programmatically supplied ordered list
    /// of page paths.
    ///
    /// Replaces any previously configured sidebar override.
    pub fn with_sidebar_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sidebar = Some(SidebarOverride::Inline(
            entries.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Overrides the sidebar with an external data source, read once when
    /// [`build`](Self::build) runs.
    ///
    /// Replaces any previously configured sidebar override.
    pub fn with_sidebar_source<T: SidebarSource + 'static>(
        mut self,
        source: T,
    ) -> Self {
        self.sidebar =
            Some(SidebarOverride::Source(Box::new(source)));
        self
    }

    /// Builds the final configuration by applying all overrides and
    /// validating the result.
    ///
    /// Defaults are assembled first, then the site file overrides (if any),
    /// then the sidebar override (reading the external source happens here).
    /// Building twice from equal inputs yields structurally equal records.
    ///
    /// # Errors
    /// - `SiteConfigError::DataSource` if the external sidebar source cannot
    ///   be read or is malformed.
    /// - `SiteConfigError::Config` if the site file is malformed or a
    ///   required field of the assembled record is empty.
    pub fn build(self) -> Result<SiteConfig> {
        let mut config = SiteConfig::default();

        if let Some(path) = self.site_file {
            apply_site_overrides(&mut config, &path)?;
        }

        match self.sidebar {
            Some(SidebarOverride::Inline(entries)) => {
                config.theme.sidebar = entries;
            }
            Some(SidebarOverride::Source(source)) => {
                config.theme.sidebar = source.entries()?;
            }
            None => {}
        }

        validate_config(&config)?;
        debug!(
            "assembled site configuration with {} sidebar entries",
            config.theme.sidebar.len()
        );

        Ok(config)
    }
}

// Internal helper functions

fn apply_site_overrides(
    config: &mut SiteConfig,
    path: &Path,
) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| {
        SiteConfigError::config(
            format!("Failed to read site file: {}", e),
            Some(path.to_path_buf()),
        )
    })?;

    let overrides: SiteOverrides =
        toml::from_str(&content).map_err(|e| {
            SiteConfigError::config(
                format!("Failed to parse site file: {}", e),
                Some(path.to_path_buf()),
            )
        })?;

    if let Some(title) = overrides.title {
        config.title = title;
    }
    if let Some(description) = overrides.description {
        config.description = description;
    }
    if !overrides.nav.is_empty() {
        config.theme.nav = overrides.nav;
    }

    Ok(())
}

fn validate_config(config: &SiteConfig) -> Result<()> {
    if config.title.is_empty() {
        return Err(SiteConfigError::config(
            "Site title must not be empty",
            None,
        ));
    }
    if config.description.is_empty() {
        return Err(SiteConfigError::config(
            "Site description must not be empty",
            None,
        ));
    }

    for tag in &config.head {
        if tag.tag.is_empty() {
            return Err(SiteConfigError::config(
                "Head tag name must not be empty",
                None,
            ));
        }
    }

    for nav in &config.theme.nav {
        if nav.text.is_empty() || nav.link.is_empty() {
            return Err(SiteConfigError::config(
                "Navigation links require a non-empty label and URL",
                None,
            ));
        }
    }

    for entry in &config.theme.sidebar {
        if entry.is_empty() {
            return Err(SiteConfigError::config(
                "Sidebar entries must not be empty",
                None,
            ));
        }
    }

    Ok(())
}

// Default value functions

fn default_nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Github", "https://github.com/rainy-me/"),
        NavLink::new("Twitter", "https://twitter.com/nerd_yue/"),
    ]
}

/// Tests for the site-configuration module.
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_sidebar_order() {
        let config = SiteConfigBuilder::new().build().unwrap();
        assert_eq!(
            config.theme.sidebar,
            vec![
                "/R-intro", "/R-lang", "/R-data", "/R-admin",
                "/R-exts", "/R-ints", "/R-FAQ",
            ]
        );
    }

    #[test]
    fn test_fixed_site_metadata() {
        let config = SiteConfigBuilder::new().build().unwrap();
        assert_eq!(config.title, "R language");
        assert_eq!(config.description, "introduction to R language");
    }

    #[test]
    fn test_nav_links_in_order() {
        let config = SiteConfigBuilder::new().build().unwrap();
        assert_eq!(config.theme.nav.len(), 2);
        assert_eq!(config.theme.nav[0].text, "Github");
        assert_eq!(
            config.theme.nav[0].link,
            "https://github.com/rainy-me/"
        );
        assert_eq!(config.theme.nav[1].text, "Twitter");
        assert_eq!(
            config.theme.nav[1].link,
            "https://twitter.com/nerd_yue/"
        );
    }

    #[test]
    fn test_single_favicon_head_tag() {
        let config = SiteConfigBuilder::new().build().unwrap();
        assert_eq!(config.head.len(), 1);
        assert_eq!(config.head[0].tag, "link");
        assert_eq!(
            config.head[0].attrs.get("rel").map(String::as_str),
            Some("icon")
        );
        assert_eq!(
            config.head[0].attrs.get("href").map(String::as_str),
            Some("/logo.jpg")
        );
    }

    #[test]
    fn test_sidebar_override_preserves_order() {
        let config = SiteConfigBuilder::new()
            .with_sidebar_entries(["/a", "/b"])
            .build()
            .unwrap();
        assert_eq!(config.theme.sidebar, vec!["/a", "/b"]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let first = SiteConfigBuilder::new().build().unwrap();
        let second = SiteConfigBuilder::new().build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_sidebar_entry_is_rejected() {
        let result = SiteConfigBuilder::new()
            .with_sidebar_entries(["/a", ""])
            .build();
        assert!(matches!(
            result,
            Err(SiteConfigError::Config { .. })
        ));
    }

    #[test]
    fn test_site_file_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let site_file = temp_dir.path().join("site.toml");
        fs::write(
            &site_file,
            "title = 'R docs'\n\n[[nav]]\ntext = 'Home'\nlink = '/'\n",
        )
        .unwrap();

        let config = SiteConfigBuilder::new()
            .with_site_file(&site_file)
            .build()
            .unwrap();

        assert_eq!(config.title, "R docs");
        // Untouched fields keep their defaults.
        assert_eq!(config.description, "introduction to R language");
        assert_eq!(config.theme.nav.len(), 1);
        assert_eq!(config.theme.nav[0].text, "Home");
    }

    #[test]
    fn test_malformed_site_file() {
        let temp_dir = TempDir::new().unwrap();
        let site_file = temp_dir.path().join("site.toml");
        fs::write(&site_file, "title = [not toml").unwrap();

        let result = SiteConfigBuilder::new()
            .with_site_file(&site_file)
            .build();
        assert!(matches!(
            result,
            Err(SiteConfigError::Config { .. })
        ));
    }

    #[test]
    fn test_wire_schema_keys() {
        let config = SiteConfigBuilder::new().build().unwrap();
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["title"], "R language");
        assert_eq!(
            value["head"][0],
            serde_json::json!([
                "link",
                { "href": "/logo.jpg", "rel": "icon" }
            ])
        );
        assert_eq!(value["themeConfig"]["displayAllHeaders"], true);
        assert_eq!(value["themeConfig"]["collapsable"], false);
        assert_eq!(value["themeConfig"]["nav"][0]["text"], "Github");
        assert_eq!(
            value["themeConfig"]["sidebar"][6],
            "/R-FAQ"
        );
    }
}
