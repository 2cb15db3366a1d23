//! Actions representing side effects to be executed by the store.
//!
//! The event handler never calls a loader itself. It returns actions, and the
//! owner of the loader executes them; this keeps [`handle_event`] synchronous
//! and side-effect free.
//!
//! [`handle_event`]: crate::app::handle_event

use crate::worker::LoadRequest;

/// Commands produced by the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run the post loader for this request and feed the reply back as
    /// [`Event::LoadReply`](crate::app::Event::LoadReply).
    FetchPosts(LoadRequest),
}
