//! Blog store handle exposed to the UI layer.
//!
//! [`BlogStore`] composes the state container, the event handler and a
//! [`PostLoader`] into one handle. It is created once by its owner and cloned
//! to whoever needs it; clones share the same state.
//!
//! # Concurrency
//!
//! The store is single-threaded and cooperative. Every action runs to
//! completion synchronously; the only suspension point is the loader. State
//! borrows never span an `.await`, so several loads can be in flight while
//! the UI keeps filtering. Each load is tagged with a generation and only the
//! most recent one may commit.
//!
//! # Example
//!
//! ```rust
//! use blogview::storage::StaticLoader;
//! use blogview::{BlogStore, LoadOutcome, Post};
//!
//! let posts = vec![
//!     Post::new(1, "Vue Best Practices").with_tags(["vue", "js"]),
//!     Post::new(2, "TS Tips").with_tags(["ts", "js"]),
//! ];
//! let (store, initial) = BlogStore::provide(StaticLoader::new(posts));
//! assert!(store.loading());
//!
//! let outcome = futures::executor::block_on(initial);
//! assert_eq!(outcome, LoadOutcome::Committed { count: 2 });
//!
//! store.set_search("vue");
//! store.toggle_tag("js");
//! assert_eq!(store.filtered_posts().len(), 1);
//! ```

use crate::app::{handle_event, Action, BlogState, BlogView, Event, FilterState, LoadStatus};
use crate::domain::{LoadFailure, Post, PostId};
use crate::storage::PostLoader;
use crate::worker::{self, LoadReply};
use futures_util::future::{FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Pending load started by [`BlogStore::load_posts`].
///
/// The loader is already running when this is returned; awaiting it only
/// waits for the reply to be applied.
pub type LoadTask = LocalBoxFuture<'static, LoadOutcome>;

/// How a load attempt ended from the store's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Posts were replaced with `count` freshly loaded posts.
    Committed { count: usize },

    /// The loader failed; posts were cleared and the failure recorded.
    Failed(LoadFailure),

    /// A newer load was issued before this one finished; the result was
    /// dropped without touching state.
    Stale,
}

/// Shared handle to the blog listing state.
#[derive(Clone)]
pub struct BlogStore {
    state: Rc<RefCell<BlogState>>,
    loader: Rc<dyn PostLoader>,
}

impl fmt::Debug for BlogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlogStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Create operations.
impl BlogStore {
    /// Creates an idle store. No load is started.
    pub fn new(loader: impl PostLoader + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(BlogState::default())),
            loader: Rc::new(loader),
        }
    }

    /// Creates a store and immediately starts the first load.
    ///
    /// The store is in the loading state on return. The caller drives the
    /// returned task to have its result applied; dropping it leaves the store
    /// loading until the next load.
    #[must_use = "the load only commits when the task is driven"]
    pub fn provide(loader: impl PostLoader + 'static) -> (Self, LoadTask) {
        let store = Self::new(loader);
        let initial = store.load_posts();
        (store, initial)
    }
}

/// Load operations.
impl BlogStore {
    /// Starts a new load and returns a task resolving once its reply has been
    /// applied.
    ///
    /// The loader is invoked and `loading` becomes true before this returns.
    /// Earlier loads still in flight become stale. Loader failures are logged
    /// and reported through [`LoadOutcome::Failed`]; they never propagate.
    ///
    /// The reply is applied only while the task is driven. A dropped task
    /// never commits, and `loading` stays true until a later load settles.
    #[must_use = "the load only commits when the task is driven"]
    pub fn load_posts(&self) -> LoadTask {
        let (_, actions) = self.dispatch(&Event::Reload);
        let mut tasks = actions.into_iter().map(|action| self.execute(action));

        match tasks.next() {
            Some(task) => task,
            None => futures_util::future::ready(LoadOutcome::Stale).boxed_local(),
        }
    }

    fn execute(&self, action: Action) -> LoadTask {
        match action {
            Action::FetchPosts(request) => {
                let pending = worker::run_load(self.loader.as_ref(), request);
                let state = Rc::clone(&self.state);

                async move {
                    let reply = pending.await;
                    let mut state = state.borrow_mut();

                    if !state.is_current(&reply) {
                        tracing::debug!(generation = %reply.generation(), "load superseded");
                        return LoadOutcome::Stale;
                    }

                    let outcome = match &reply {
                        LoadReply::Loaded { posts, .. } => LoadOutcome::Committed { count: posts.len() },
                        LoadReply::Failed { failure, .. } => LoadOutcome::Failed(failure.clone()),
                    };
                    handle_event(&mut state, &Event::LoadReply(reply));
                    outcome
                }
                .boxed_local()
            }
        }
    }

    fn dispatch(&self, event: &Event) -> (bool, Vec<Action>) {
        handle_event(&mut self.state.borrow_mut(), event)
    }
}

/// Filter and selection actions.
impl BlogStore {
    /// Replaces the search term verbatim.
    pub fn set_search(&self, term: impl Into<String>) {
        self.dispatch(&Event::SetSearch(term.into()));
    }

    pub fn toggle_tag(&self, tag: impl Into<String>) {
        self.dispatch(&Event::ToggleTag(tag.into()));
    }

    #[must_use]
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.state.borrow().filters().is_tag_active(tag)
    }

    pub fn reset_filters(&self) {
        self.dispatch(&Event::ResetFilters);
    }

    /// Opens `id` in the detail view, or closes it with `None`.
    pub fn select_post(&self, id: Option<PostId>) {
        self.dispatch(&Event::SelectPost(id));
    }
}

/// Read operations. Each call returns a snapshot of the current state.
impl BlogStore {
    #[must_use]
    pub fn posts(&self) -> Vec<Post> {
        self.state.borrow().posts().to_vec()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.borrow().loading()
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.state.borrow().status().clone()
    }

    #[must_use]
    pub fn filters(&self) -> FilterState {
        self.state.borrow().filters().clone()
    }

    #[must_use]
    pub fn filtered_posts(&self) -> Vec<Post> {
        self.state.borrow().filtered_posts().into_iter().cloned().collect()
    }

    #[must_use]
    pub fn available_tags(&self) -> Vec<String> {
        self.state.borrow().available_tags()
    }

    #[must_use]
    pub fn filters_active(&self) -> bool {
        self.state.borrow().filters_active()
    }

    #[must_use]
    pub fn selected_post(&self) -> Option<Post> {
        self.state.borrow().selected_post().cloned()
    }

    /// Computes the whole listing in one borrow.
    #[must_use]
    pub fn view(&self) -> BlogView {
        self.state.borrow().compute_view()
    }
}
