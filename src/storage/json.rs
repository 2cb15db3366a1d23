//! JSON file-based post repository.
//!
//! Reads a file shaped like a repository response, `{ "data": [...] }`, on
//! every load. Nothing is cached between loads, so editing the file and
//! reloading picks up the change.

use crate::domain::error::Result;
use crate::storage::backend::PostLoader;
use crate::storage::models::PostsEnvelope;
use futures_util::future::{FutureExt, LocalBoxFuture};
use std::path::{Path, PathBuf};

/// Post loader backed by a JSON file on disk.
///
/// # File Format
///
/// ```json
/// {
///   "data": [
///     {
///       "id": 1,
///       "title": "Vue Best Practices",
///       "content_short": "...",
///       "content_full": "...",
///       "created_at": "2025-04-09T12:00:00Z",
///       "cover": "https://example.com/vue.png",
///       "tags": ["vue", "js"],
///       "comments": []
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    file_path: PathBuf,
}

impl JsonFileLoader {
    /// Creates a loader for `file_path`. The file is not touched until the
    /// first load.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use blogview::storage::JsonFileLoader;
    ///
    /// let loader = JsonFileLoader::new("/var/lib/blog/posts.json");
    /// ```
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Reads and decodes the posts file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    fn read_envelope(path: &Path) -> Result<PostsEnvelope> {
        let _span = tracing::debug_span!("json_read_posts", path = ?path).entered();

        let contents = std::fs::read_to_string(path)?;
        let envelope: PostsEnvelope = serde_json::from_str(&contents)?;

        tracing::debug!(post_count = envelope.data.len(), "loaded posts file");
        Ok(envelope)
    }
}

impl PostLoader for JsonFileLoader {
    fn load(&self) -> LocalBoxFuture<'static, Result<PostsEnvelope>> {
        let path = self.file_path.clone();
        async move { Self::read_envelope(&path) }.boxed_local()
    }
}
