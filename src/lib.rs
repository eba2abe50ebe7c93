//! component-builder - concatenate a component's scripts and styles
//!
//! A component is a directory holding a `component.json` manifest that lists
//! script and style files. [`Builder`] reads the listed files concurrently and
//! joins them in manifest order: scripts become self-registering CommonJS
//! modules, styles are concatenated as they are.
//!
//! ```no_run
//! # async fn run() -> component_builder::Result<()> {
//! use component_builder::Builder;
//!
//! let mut builder = Builder::new("components/tip");
//! let output = builder.build("components/tip").await?;
//! println!("{}", output.scripts);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod common;
pub mod config;
pub mod error;

#[cfg(test)]
mod temp;
#[cfg(test)]
mod test_fixtures;

pub use builder::{BuildOutput, Builder, format_module};
pub use common::fs::{FileStore, LocalFs, MemoryStore};
pub use config::Manifest;
pub use error::{BuilderError, ErrorKind, Result};
