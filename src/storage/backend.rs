//! Post repository abstraction.
//!
//! This module defines the [`PostLoader`] trait, the single capability the
//! store needs from the outside world: produce the current list of posts,
//! eventually, or fail.
//!
//! # Design Philosophy
//!
//! The trait is minimal. Implementations decide where posts come from (a
//! file, an HTTP client, a fixture); the store only decides when to ask and
//! whether the answer is still wanted.

use crate::domain::error::Result;
use crate::storage::models::PostsEnvelope;
use futures_util::future::{FutureExt, LocalBoxFuture};
use std::future::Future;

/// Asynchronous source of posts.
///
/// `load` is called once per load attempt. The returned future must own
/// everything it needs (`'static`), so several attempts can be in flight at
/// once without borrowing the loader.
///
/// Any closure returning a future of `Result<PostsEnvelope>` is a loader:
///
/// ```rust
/// use blogview::storage::{PostLoader, PostsEnvelope};
/// use blogview::{BlogviewError, Post};
///
/// let loader = || async {
///     Ok::<_, BlogviewError>(PostsEnvelope::new(vec![Post::new(1, "Hello")]))
/// };
/// let envelope = futures::executor::block_on(loader.load()).unwrap();
/// assert_eq!(envelope.data.len(), 1);
/// ```
pub trait PostLoader {
    /// Starts fetching posts.
    ///
    /// # Errors
    ///
    /// The returned future resolves to an error if the repository cannot be
    /// reached or its payload cannot be decoded.
    fn load(&self) -> LocalBoxFuture<'static, Result<PostsEnvelope>>;
}

impl<F, Fut> PostLoader for F
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<PostsEnvelope>> + 'static,
{
    fn load(&self) -> LocalBoxFuture<'static, Result<PostsEnvelope>> {
        self().boxed_local()
    }
}
