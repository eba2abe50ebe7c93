use clap::Parser;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print scripts, then styles:\n    component-builder build\n\n\
                  Build another component directory:\n    component-builder build ../tip\n\n\
                  Write bundles to files:\n    component-builder build --js build.js --css build.css\n\n\
                  Print both bundles as one JSON object:\n    component-builder build --json")]
pub struct BuildArgs {
    /// Component directory to build (defaults to --dir)
    pub target: Option<PathBuf>,

    /// Write the script bundle to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub js: Option<PathBuf>,

    /// Write the style bundle to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub css: Option<PathBuf>,

    /// Print {"scripts": ..., "styles": ...} as JSON
    #[arg(long, conflicts_with_all = ["js", "css"])]
    pub json: bool,
}
