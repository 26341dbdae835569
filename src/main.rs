// Copyright © 2026 rdocsite Contributors. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # rdocsite CLI
//!
//! This is the main entry point for the rdocsite command-line interface.
//! It initializes the logger and runs the main CLI process.

use anyhow::Context;

/// The main entry point for the rdocsite CLI.
fn main() {
    env_logger::init();

    if let Err(err) = rdocsite::cli::execute()
        .context("Failed to assemble site configuration")
    {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
