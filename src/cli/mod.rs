//! CLI definitions using clap derive API
//!
//! Argument types for commands that take more than the global options live
//! in submodules:
//! - build: Build command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;

pub use build::BuildArgs;

/// component-builder - bundle a component's scripts and styles
#[derive(Parser, Debug)]
#[command(
    name = "component-builder",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Concatenate a component's scripts and styles into single bundles",
    long_about = "Reads component.json from the component directory and concatenates the listed \
                  scripts (each wrapped in a require.register shim) and styles, in manifest order.",
    after_help = "Examples:\n   \
                  component-builder scripts                  # Print the script bundle\n   \
                  component-builder -d ./tip styles          # Print the style bundle of ./tip\n   \
                  component-builder build --js build.js      # Write scripts, print styles\n"
)]
pub struct Cli {
    /// Component directory containing component.json
    #[arg(long, short = 'd', global = true, env = "COMPONENT_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the concatenated, shim-wrapped scripts
    Scripts,

    /// Print the concatenated styles
    Styles,

    /// Build scripts and styles together
    Build(BuildArgs),
}
