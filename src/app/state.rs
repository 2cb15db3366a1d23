//! Blog listing state container.
//!
//! This module defines [`BlogState`], the single owner of the loaded posts,
//! the load lifecycle, the filter inputs and the selected post. Derived values
//! (filtered posts, tag vocabulary, activity flag) are computed from it on
//! every read and never stored.
//!
//! # State Components
//!
//! - **Posts**: Last committed post collection, replaced wholesale
//! - **Load**: Generation tracker and lifecycle status
//! - **Filters**: Search term and required tags
//! - **Selection**: Id of the post opened in the detail view
//!
//! # Example
//!
//! ```rust
//! use blogview::app::BlogState;
//!
//! let mut state = BlogState::default();
//! let request = state.begin_load();
//! assert!(state.loading());
//! # let _ = request;
//! ```

use super::filters::FilterState;
use super::load::{LoadStatus, LoadTracker};
use super::view::{self, BlogView};
use crate::domain::{Post, PostId};
use crate::worker::{LoadReply, LoadRequest};

/// Central state container for the blog listing.
#[derive(Debug, Clone, Default)]
pub struct BlogState {
    posts: Vec<Post>,
    load: LoadTracker,
    filters: FilterState,
    selected: Option<PostId>,
}

impl BlogState {
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        self.load.status()
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.load.status().is_loading()
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Starts a new load attempt and returns the request to hand to the
    /// worker. Any earlier in-flight attempt becomes stale.
    pub fn begin_load(&mut self) -> LoadRequest {
        let generation = self.load.begin();
        tracing::debug!(%generation, "load started");
        LoadRequest::new(generation)
    }

    /// True if `reply` answers the most recent load request.
    #[must_use]
    pub fn is_current(&self, reply: &LoadReply) -> bool {
        self.load.is_current(reply.generation())
    }

    /// Commits a worker reply if it is current. Returns false when the reply
    /// was stale and has been discarded.
    ///
    /// A failed load clears the posts; the previous collection is not kept.
    pub fn apply_reply(&mut self, reply: &LoadReply) -> bool {
        match reply {
            LoadReply::Loaded { generation, posts } => {
                if !self.load.succeed(*generation) {
                    tracing::debug!(%generation, "discarding stale load result");
                    return false;
                }
                self.posts.clone_from(posts);
                tracing::debug!(%generation, post_count = self.posts.len(), "posts committed");
            }
            LoadReply::Failed { generation, failure } => {
                if !self.load.fail(*generation, failure.clone()) {
                    tracing::debug!(%generation, "discarding stale load failure");
                    return false;
                }
                self.posts.clear();
                tracing::error!(%generation, cause = %failure.cause, "LoadFailure: failed to load posts");
            }
        }
        true
    }

    /// Records the post opened in the detail view.
    ///
    /// `None` clears the selection. An id that is not among the loaded posts
    /// is ignored. Returns true if the selection changed.
    pub fn select_post(&mut self, id: Option<PostId>) -> bool {
        if let Some(id) = id {
            if !self.posts.iter().any(|p| p.id == id) {
                tracing::debug!(post_id = id, "ignoring selection of unknown post");
                return false;
            }
        }
        let changed = self.selected != id;
        self.selected = id;
        changed
    }

    /// Returns the selected post, resolved against the current posts.
    #[must_use]
    pub fn selected_post(&self) -> Option<&Post> {
        let id = self.selected?;
        self.posts.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn filtered_posts(&self) -> Vec<&Post> {
        view::filter_posts(&self.posts, &self.filters)
    }

    #[must_use]
    pub fn available_tags(&self) -> Vec<String> {
        view::available_tags(&self.posts)
    }

    #[must_use]
    pub fn filters_active(&self) -> bool {
        self.filters.is_active()
    }

    /// Computes an owned snapshot of the listing.
    #[must_use]
    pub fn compute_view(&self) -> BlogView {
        BlogView {
            filtered_posts: self.filtered_posts().into_iter().cloned().collect(),
            available_tags: self.available_tags(),
            filters_active: self.filters_active(),
            search: self.filters.search.clone(),
            active_tags: self.filters.tags.clone(),
            loading: self.loading(),
            total_posts: self.posts.len(),
        }
    }
}
