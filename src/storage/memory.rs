//! Fixed in-memory post repository.

use crate::domain::error::{BlogviewError, Result};
use crate::domain::Post;
use crate::storage::backend::PostLoader;
use crate::storage::models::PostsEnvelope;
use futures_util::future::{self, FutureExt, LocalBoxFuture};

/// Loader that always answers with the same posts, or the same failure.
///
/// Useful for previews, demos and tests where no repository is reachable.
#[derive(Debug, Clone)]
pub struct StaticLoader {
    outcome: std::result::Result<Vec<Post>, String>,
}

impl StaticLoader {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self { outcome: Ok(posts) }
    }

    /// A loader whose every load fails with a [`BlogviewError::Loader`].
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl PostLoader for StaticLoader {
    fn load(&self) -> LocalBoxFuture<'static, Result<PostsEnvelope>> {
        let result = match &self.outcome {
            Ok(posts) => Ok(PostsEnvelope::new(posts.clone())),
            Err(message) => Err(BlogviewError::Loader(message.clone())),
        };
        future::ready(result).boxed_local()
    }
}
