//! Load worker: runs a loader for one request and turns the result into a
//! [`LoadReply`].
//!
//! This is the only place a loader failure is observed. Errors and panics are
//! caught here and converted into [`LoadReply::Failed`], so nothing escapes
//! to the caller of a load. The failure is only reported at error level once
//! the state commits it; a stale reply never reaches that point.

use crate::domain::error::{BlogviewError, Result};
use crate::domain::LoadFailure;
use crate::storage::{PostLoader, PostsEnvelope};
use crate::worker::{LoadReply, LoadRequest};
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::Instrument;

/// Starts `loader` for `request` and returns a future resolving to its reply.
///
/// The loader is invoked immediately, before the returned future is first
/// polled, so the fetch is already under way when this function returns.
///
/// # Example
///
/// ```rust
/// use blogview::app::load::Generation;
/// use blogview::storage::StaticLoader;
/// use blogview::worker::{run_load, LoadReply, LoadRequest};
///
/// let loader = StaticLoader::failing("offline");
/// let reply = futures::executor::block_on(run_load(&loader, LoadRequest::new(Generation(1))));
/// assert!(matches!(reply, LoadReply::Failed { .. }));
/// ```
pub fn run_load(loader: &dyn PostLoader, request: LoadRequest) -> LocalBoxFuture<'static, LoadReply> {
    let span = tracing::debug_span!("run_load", generation = %request.generation);

    let pending = span.in_scope(|| {
        tracing::debug!("starting loader");
        match panic::catch_unwind(AssertUnwindSafe(|| loader.load())) {
            Ok(pending) => AssertUnwindSafe(pending)
                .catch_unwind()
                .map(|outcome| outcome.unwrap_or_else(|payload| Err(panic_error(&*payload))))
                .boxed_local(),
            Err(payload) => future::ready(Err(panic_error(&*payload))).boxed_local(),
        }
    });

    async move { reply_for(request, pending.await) }
        .instrument(span)
        .boxed_local()
}

/// Converts a loader result into a reply, logging failures.
fn reply_for(request: LoadRequest, result: Result<PostsEnvelope>) -> LoadReply {
    let generation = request.generation;
    match result {
        Ok(envelope) => {
            tracing::debug!(post_count = envelope.data.len(), "loader resolved");
            LoadReply::Loaded {
                generation,
                posts: envelope.data,
            }
        }
        Err(e) => {
            let failure = LoadFailure::from(&e);
            tracing::warn!(error = %e, "loader failed");
            LoadReply::Failed { generation, failure }
        }
    }
}

fn panic_error(payload: &(dyn Any + Send)) -> BlogviewError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    BlogviewError::Loader(format!("loader panicked: {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::load::Generation;
    use crate::domain::Post;
    use crate::storage::StaticLoader;
    use futures::executor::block_on;

    fn request(n: u64) -> LoadRequest {
        LoadRequest::new(Generation(n))
    }

    #[test]
    fn success_carries_posts_and_generation() {
        let loader = StaticLoader::new(vec![Post::new(1, "a")]);

        let reply = block_on(run_load(&loader, request(4)));

        match reply {
            LoadReply::Loaded { generation, posts } => {
                assert_eq!(generation, Generation(4));
                assert_eq!(posts.len(), 1);
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn rejection_becomes_failed_reply() {
        let loader = StaticLoader::failing("Failed to load");

        let reply = block_on(run_load(&loader, request(1)));

        assert_eq!(
            reply,
            LoadReply::Failed {
                generation: Generation(1),
                failure: LoadFailure::new("Loader error: Failed to load"),
            }
        );
    }

    #[test]
    fn panic_while_starting_is_caught() {
        let loader = || -> futures_util::future::Ready<Result<PostsEnvelope>> {
            panic!("no network stack")
        };

        let reply = block_on(run_load(&loader, request(2)));

        let LoadReply::Failed { failure, .. } = reply else {
            panic!("expected failure");
        };
        assert!(failure.cause.contains("no network stack"));
    }

    #[test]
    fn panic_while_resolving_is_caught() {
        let loader = || async {
            let message = String::from("decoder exploded");
            if !message.is_empty() {
                panic!("{message}");
            }
            Ok::<_, BlogviewError>(PostsEnvelope::default())
        };

        let reply = block_on(run_load(&loader, request(3)));

        let LoadReply::Failed { failure, .. } = reply else {
            panic!("expected failure");
        };
        assert!(failure.cause.contains("decoder exploded"));
    }
}
