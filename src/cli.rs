// Copyright © 2026 rdocsite Contributors. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for rdocsite
//!
//! This module provides the command-line interface for the rdocsite
//! configuration assembler. It handles argument parsing, command execution,
//! and user interaction.
//!
//! # Examples
//!
//! Basic usage example to parse an `emit` command with an output argument:
//!
//! ```
//! use rdocsite::cli;
//!
//! let matches = cli::build().get_matches_from(vec![
//!     "rdocsite",
//!     "emit",
//!     "--output",
//!     "out/config.json",
//! ]);
//!
//! assert!(matches.subcommand_matches("emit").is_some());
//! ```

use crate::core::config::SiteConfigBuilder;
use crate::core::error::Result;
use crate::emit::ConfigEmitter;
use crate::sidebar::{JsonFileSource, SidebarSource};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use std::path::PathBuf;

/// The current version of rdocsite, as defined in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default output path for the emitted configuration document.
pub const DEFAULT_OUTPUT: &str = "config.json";

/// Builds and configures the rdocsite command-line interface.
pub fn build() -> Command {
    debug!("Building CLI command structure");

    Command::new("rdocsite")
        .author("rdocsite Contributors")
        .about("Assembles the site configuration for the R manuals documentation site.")
        .version(VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("emit")
                .about("Assemble the site configuration and write it as JSON")
                .arg(
                    Arg::new("sidebar")
                        .short('s')
                        .long("sidebar")
                        .help("JSON file providing the ordered sidebar page paths")
                        .value_parser(value_parser!(PathBuf))
                )
                .arg(
                    Arg::new("site")
                        .long("site")
                        .help("TOML file overriding title, description, or navigation links")
                        .value_parser(value_parser!(PathBuf))
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output path for the emitted JSON document")
                        .value_parser(value_parser!(PathBuf))
                        .default_value(DEFAULT_OUTPUT)
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Emit compact JSON instead of pretty-printed output")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("check")
                .about("Validate a sidebar data source without emitting anything")
                .arg(
                    Arg::new("sidebar")
                        .short('s')
                        .long("sidebar")
                        .help("JSON file providing the ordered sidebar page paths")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                )
        )
}

/// Executes the command-line interface by matching the subcommand and arguments.
///
/// # Returns
/// * `Result<()>` - Indicates success, or an error if execution fails.
pub fn execute() -> Result<()> {
    let matches = build().get_matches();
    run(&matches)
}

/// Dispatches an already-parsed set of CLI matches.
pub fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("emit", sub_matches)) => {
            let sidebar = sub_matches.get_one::<PathBuf>("sidebar");
            let site = sub_matches.get_one::<PathBuf>("site");
            let output = sub_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            let compact = sub_matches.get_flag("compact");
            emit_config(sidebar, site, &output, compact)
        }
        Some(("check", sub_matches)) => {
            let sidebar = sub_matches
                .get_one::<PathBuf>("sidebar")
                .cloned()
                .unwrap_or_default();
            check_sidebar(&sidebar)
        }
        // clap enforces subcommand_required, so this arm is unreachable in
        // practice.
        _ => Ok(()),
    }
}

/// Assembles the site configuration and writes it to the output path.
fn emit_config(
    sidebar: Option<&PathBuf>,
    site: Option<&PathBuf>,
    output: &PathBuf,
    compact: bool,
) -> Result<()> {
    info!("Assembling site configuration, output at '{:?}'", output);

    let mut builder = SiteConfigBuilder::new();
    if let Some(path) = site {
        builder = builder.with_site_file(path);
    }
    if let Some(path) = sidebar {
        builder =
            builder.with_sidebar_source(JsonFileSource::new(path));
    }

    let config = builder.build()?;
    ConfigEmitter::new()
        .with_pretty_print(!compact)
        .write(&config, output)
}

/// Validates the sidebar data source and reports the number of entries.
fn check_sidebar(path: &PathBuf) -> Result<()> {
    info!("Checking sidebar data source at '{:?}'", path);

    let entries = JsonFileSource::new(path).entries()?;
    println!(
        "{}: {} sidebar entries",
        path.display(),
        entries.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ArgMatches;

    fn get_matches(args: Vec<&str>) -> ArgMatches {
        build().get_matches_from(args)
    }

    #[test]
    fn test_emit_command() {
        let matches = get_matches(vec![
            "rdocsite",
            "emit",
            "--sidebar",
            "sidebar.json",
            "--output",
            "out/config.json",
            "--compact",
        ]);
        let emit_cmd = matches.subcommand_matches("emit").unwrap();

        assert_eq!(
            emit_cmd.get_one::<PathBuf>("sidebar").unwrap().as_path(),
            PathBuf::from("sidebar.json").as_path()
        );
        assert_eq!(
            emit_cmd.get_one::<PathBuf>("output").unwrap().as_path(),
            PathBuf::from("out/config.json").as_path()
        );
        assert!(emit_cmd.get_flag("compact"));
    }

    #[test]
    fn test_emit_default_output() {
        let matches = get_matches(vec!["rdocsite", "emit"]);
        let emit_cmd = matches.subcommand_matches("emit").unwrap();

        assert_eq!(
            emit_cmd.get_one::<PathBuf>("output").unwrap().as_path(),
            PathBuf::from(DEFAULT_OUTPUT).as_path()
        );
        assert!(!emit_cmd.get_flag("compact"));
    }

    #[test]
    fn test_check_command_requires_sidebar() {
        let result = build()
            .try_get_matches_from(vec!["rdocsite", "check"]);
        assert!(result.is_err());
    }
}
