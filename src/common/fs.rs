//! File content storage with unified error handling
//!
//! The builder never touches the file system directly. It reads through a
//! [`FileStore`], which is either the local disk ([`LocalFs`]) or an
//! in-memory map ([`MemoryStore`]).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::common::path;
use crate::error::{self, Result};

/// Read access to a path-addressable text store
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Read the full contents of `path` as UTF-8 text
    ///
    /// Fails with [`BuilderError::FileNotFound`](crate::error::BuilderError::FileNotFound)
    /// when nothing exists at `path`, and with
    /// [`BuilderError::FileReadFailed`](crate::error::BuilderError::FileReadFailed)
    /// for any other problem.
    async fn read_to_string(&self, path: &Path) -> Result<String>;
}

#[async_trait]
impl<S: FileStore + ?Sized> FileStore for Arc<S> {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path).await
    }
}

/// The local file system, read with `tokio::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

#[async_trait]
impl FileStore for LocalFs {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        debug!(path = %path.display(), "reading file");
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| error::fs::from_read(path, &e))
    }
}

#[derive(Debug, Clone)]
struct MemoryFile {
    content: std::result::Result<String, String>,
    latency: Duration,
}

/// In-memory file store
///
/// Keys are normalized absolute paths. Each entry can carry a read latency,
/// which makes it possible to control the order in which concurrent reads
/// complete. Every read is counted, hits and misses alike.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, MemoryFile>,
    reads: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file that is returned immediately
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.with_delayed_file(path, content, Duration::ZERO)
    }

    /// Add a file whose read completes after `latency`
    #[must_use]
    pub fn with_delayed_file(
        mut self,
        path: impl AsRef<Path>,
        content: impl Into<String>,
        latency: Duration,
    ) -> Self {
        self.insert(path, Ok(content.into()), latency);
        self
    }

    /// Add a file whose read fails with `reason` after `latency`
    #[must_use]
    pub fn with_failing_file(
        mut self,
        path: impl AsRef<Path>,
        reason: impl Into<String>,
        latency: Duration,
    ) -> Self {
        self.insert(path, Err(reason.into()), latency);
        self
    }

    /// Number of reads served so far
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn insert(
        &mut self,
        file_path: impl AsRef<Path>,
        content: std::result::Result<String, String>,
        latency: Duration,
    ) {
        self.files.insert(
            path::absolute(file_path.as_ref()),
            MemoryFile { content, latency },
        );
    }
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn read_to_string(&self, file_path: &Path) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        let Some(file) = self.files.get(&path::absolute(file_path)) else {
            return Err(error::fs::not_found(file_path.display().to_string()));
        };

        if !file.latency.is_zero() {
            tokio::time::sleep(file.latency).await;
        }

        file.content
            .clone()
            .map_err(|reason| error::fs::read_failed(file_path.display().to_string(), reason))
    }
}
