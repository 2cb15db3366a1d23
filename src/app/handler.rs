//! Event handling and state transition logic.
//!
//! This module implements the handler that turns UI intents and worker
//! replies into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the UI layer or from the load worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `BlogState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use blogview::app::{handle_event, Action, BlogState, Event};
//!
//! let mut state = BlogState::default();
//! let (changed, actions) = handle_event(&mut state, &Event::Reload);
//! assert!(changed);
//! assert!(matches!(actions.as_slice(), [Action::FetchPosts(_)]));
//! ```

use crate::app::{Action, BlogState};
use crate::domain::PostId;
use crate::worker::LoadReply;

/// Events triggered by the UI or by load worker replies.
///
/// The handler processes these sequentially, so state transitions are
/// deterministic for a given event order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the search term verbatim.
    SetSearch(String),
    /// Adds the tag to the required set, or removes it if already present.
    ToggleTag(String),
    /// Clears the search term and all required tags.
    ResetFilters,
    /// Opens a post in the detail view, or closes it with `None`.
    SelectPost(Option<PostId>),
    /// Requests a fresh load of the post collection.
    Reload,
    /// Delivers the outcome of a load back to the state.
    LoadReply(LoadReply),
}

/// Processes an event, mutates state, and returns actions to execute.
///
/// # Returns
///
/// `(changed, actions)`: `changed` is true when the derived view may differ
/// from before the event, so consumers know to re-read it. A stale
/// [`Event::LoadReply`] yields `(false, vec![])`.
pub fn handle_event(state: &mut BlogState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = %event_kind(event)).entered();

    match event {
        Event::SetSearch(term) => {
            let changed = state.filters_mut().set_search(term.as_str());
            tracing::trace!(query = %term, changed, "search term updated");
            (changed, vec![])
        }
        Event::ToggleTag(tag) => {
            let active = state.filters_mut().toggle_tag(tag);
            tracing::debug!(tag = %tag, active, "tag toggled");
            (true, vec![])
        }
        Event::ResetFilters => {
            let changed = state.filters_mut().reset();
            tracing::debug!(changed, "filters reset");
            (changed, vec![])
        }
        Event::SelectPost(id) => (state.select_post(*id), vec![]),
        Event::Reload => {
            let request = state.begin_load();
            (true, vec![Action::FetchPosts(request)])
        }
        Event::LoadReply(reply) => (state.apply_reply(reply), vec![]),
    }
}

/// Short label used in spans so post payloads are not dumped into logs.
const fn event_kind(event: &Event) -> &'static str {
    match event {
        Event::SetSearch(_) => "SetSearch",
        Event::ToggleTag(_) => "ToggleTag",
        Event::ResetFilters => "ResetFilters",
        Event::SelectPost(_) => "SelectPost",
        Event::Reload => "Reload",
        Event::LoadReply(LoadReply::Loaded { .. }) => "LoadReply::Loaded",
        Event::LoadReply(LoadReply::Failed { .. }) => "LoadReply::Failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Post;

    fn load(state: &mut BlogState, posts: Vec<Post>) {
        let (_, actions) = handle_event(state, &Event::Reload);
        let [Action::FetchPosts(request)] = actions.as_slice() else {
            panic!("expected a single fetch");
        };
        let reply = LoadReply::Loaded {
            generation: request.generation,
            posts,
        };
        assert!(handle_event(state, &Event::LoadReply(reply)).0);
    }

    #[test]
    fn reload_marks_loading_and_requests_fetch() {
        let mut state = BlogState::default();

        let (changed, actions) = handle_event(&mut state, &Event::Reload);

        assert!(changed);
        assert_eq!(actions.len(), 1);
        assert!(state.loading());
    }

    #[test]
    fn end_to_end_search_then_tag() {
        let mut state = BlogState::default();
        load(
            &mut state,
            vec![
                Post::new(1, "Vue Best Practices").with_tags(["vue", "js"]),
                Post::new(2, "TS Tips").with_tags(["ts", "js"]),
            ],
        );

        handle_event(&mut state, &Event::SetSearch("Vue".to_string()));
        let ids: Vec<u64> = state.filtered_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);

        handle_event(&mut state, &Event::ToggleTag("js".to_string()));
        let ids: Vec<u64> = state.filtered_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn unchanged_search_reports_no_change() {
        let mut state = BlogState::default();

        assert!(handle_event(&mut state, &Event::SetSearch("x".into())).0);
        assert!(!handle_event(&mut state, &Event::SetSearch("x".into())).0);
    }

    #[test]
    fn reset_deactivates_filters() {
        let mut state = BlogState::default();
        handle_event(&mut state, &Event::SetSearch("test".into()));
        handle_event(&mut state, &Event::ToggleTag("vue".into()));

        let (changed, _) = handle_event(&mut state, &Event::ResetFilters);

        assert!(changed);
        assert!(!state.filters_active());
    }

    #[test]
    fn stale_reply_reports_no_change() {
        let mut state = BlogState::default();
        let (_, first) = handle_event(&mut state, &Event::Reload);
        let (_, second) = handle_event(&mut state, &Event::Reload);
        let [Action::FetchPosts(first)] = first.as_slice() else { panic!() };
        let [Action::FetchPosts(second)] = second.as_slice() else { panic!() };

        let fresh = LoadReply::Loaded {
            generation: second.generation,
            posts: vec![Post::new(2, "B")],
        };
        let stale = LoadReply::Loaded {
            generation: first.generation,
            posts: vec![Post::new(1, "A")],
        };

        assert!(handle_event(&mut state, &Event::LoadReply(fresh)).0);
        assert_eq!(handle_event(&mut state, &Event::LoadReply(stale)), (false, vec![]));
        assert_eq!(state.posts()[0].id, 2);
    }
}
