//! Component builder
//!
//! A [`Builder`] is bound to a component directory. It loads the component's
//! `component.json` once, then reads the listed scripts and styles
//! concurrently and joins them back together in manifest order:
//!
//! - scripts are each wrapped in a `require.register` shim named after the
//!   file's base name, see [`format_module`]
//! - styles are concatenated verbatim
//!
//! All reads of one aggregation run inside the calling task. The first read
//! to fail ends the aggregation and the remaining reads are dropped, so a
//! caller never sees partial output.

mod shim;


use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::common::fs::{FileStore, LocalFs};
use crate::common::path;
use crate::config::{MANIFEST_FILE, Manifest};
use crate::error::Result;

pub use shim::format_module;

/// Output of [`Builder::build`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildOutput {
    /// Concatenated, shim-wrapped scripts
    pub scripts: String,
    /// Concatenated styles
    pub styles: String,
}

/// Builds the script and style bundles of one component
#[derive(Debug)]
pub struct Builder<S = LocalFs> {
    dir: PathBuf,
    components_dir: PathBuf,
    store: S,
    manifest: OnceCell<Arc<Manifest>>,
}

impl Builder<LocalFs> {
    /// Create a builder reading from the local file system
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_store(dir, LocalFs)
    }
}

impl<S: FileStore> Builder<S> {
    /// Create a builder reading through `store`
    pub fn with_store(dir: impl AsRef<Path>, store: S) -> Self {
        let dir = path::absolute(dir.as_ref());
        let components_dir = path::resolve(&dir, "..");
        Self {
            dir,
            components_dir,
            store,
            manifest: OnceCell::new(),
        }
    }

    /// Directory manifest entries are currently resolved against
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Parent of the directory the builder was created with
    ///
    /// Computed once in the constructor. [`Builder::build`] changes
    /// [`Builder::dir`] but leaves this untouched.
    pub fn components_dir(&self) -> &Path {
        &self.components_dir
    }

    /// File store this builder reads through
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve `token` against the current directory
    pub fn resolve(&self, token: impl AsRef<Path>) -> PathBuf {
        path::resolve(&self.dir, token)
    }

    /// Load `component.json`, reading it at most once per builder
    ///
    /// Concurrent first calls share one read. A failed load is not cached,
    /// so the next call reads again.
    pub async fn load_manifest(&self) -> Result<Arc<Manifest>> {
        if let Some(manifest) = self.manifest.get() {
            debug!("manifest cache hit");
            return Ok(Arc::clone(manifest));
        }

        let manifest = self
            .manifest
            .get_or_try_init(|| async {
                let manifest_path = self.resolve(MANIFEST_FILE);
                debug!(path = %manifest_path.display(), "loading manifest");
                let json = self.store.read_to_string(&manifest_path).await?;
                Manifest::parse(&manifest_path, &json).map(Arc::new)
            })
            .await?;

        Ok(Arc::clone(manifest))
    }

    /// Drop the cached manifest so the next load reads it again
    pub fn clear_manifest(&mut self) {
        self.manifest.take();
    }

    /// Concatenate the manifest's scripts, each wrapped in a registration shim
    pub async fn build_scripts(&self) -> Result<String> {
        let manifest = self.load_manifest().await?;
        let files = self.read_all(manifest.scripts()?).await?;

        let modules: Vec<String> = files
            .iter()
            .map(|(file_path, body)| format_module(&path::base_name(file_path), body))
            .collect();

        info!(count = modules.len(), dir = %self.dir.display(), "built scripts");
        Ok(modules.join("\n"))
    }

    /// Concatenate the manifest's styles verbatim
    pub async fn build_styles(&self) -> Result<String> {
        let manifest = self.load_manifest().await?;
        let files = self.read_all(manifest.styles()?).await?;

        let styles: Vec<String> = files.into_iter().map(|(_, content)| content).collect();

        info!(count = styles.len(), dir = %self.dir.display(), "built styles");
        Ok(styles.join("\n"))
    }

    /// Build scripts and styles of the component in `target`
    ///
    /// Switches [`Builder::dir`] to `target` for this and all later calls.
    /// The cached manifest, if any, is kept. Both bundles are built
    /// concurrently and the first failure wins.
    pub async fn build(&mut self, target: impl AsRef<Path>) -> Result<BuildOutput> {
        self.dir = path::absolute(target.as_ref());

        let this = &*self;
        let (scripts, styles) = tokio::try_join!(this.build_scripts(), this.build_styles())?;

        Ok(BuildOutput { scripts, styles })
    }

    /// Read every token concurrently, returning contents in token order
    async fn read_all(&self, tokens: &[String]) -> Result<Vec<(PathBuf, String)>> {
        let reads = tokens.iter().map(|token| {
            let file_path = self.resolve(token);
            async move {
                match self.store.read_to_string(&file_path).await {
                    Ok(content) => Ok((file_path, content)),
                    Err(e) => {
                        warn!(path = %file_path.display(), error = %e, "read failed");
                        Err(e)
                    }
                }
            }
        });

        try_join_all(reads).await
    }
}
