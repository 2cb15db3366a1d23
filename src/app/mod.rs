//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the [`BlogStore`](crate::store::BlogStore) handle
//! and the domain/storage/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! UI intent → Event → handle_event → BlogState mutation → Action → Loader
//!                ↑                                                  ↓
//!                └──────────────── LoadReply ───────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filters`]: Search term and required tags
//! - [`handler`]: Event processing and state transition coordinator
//! - [`load`]: Load lifecycle and generation tracking
//! - [`state`]: Central state container
//! - [`view`]: Derived listing computed from posts and filters

pub mod actions;
pub mod filters;
pub mod handler;
pub mod load;
pub mod state;
pub mod view;

pub use actions::Action;
pub use filters::FilterState;
pub use handler::{handle_event, Event};
pub use load::{Generation, LoadStatus, LoadTracker};
pub use state::BlogState;
pub use view::{available_tags, filter_posts, BlogView};
