//! Load worker for asynchronous post fetching.
//!
//! The worker sits between the state container and the [`PostLoader`]
//! capability. It never touches state itself: it runs a loader for a request
//! and hands back a reply tagged with the request's generation.
//!
//! # Architecture
//!
//! - `messages`: request/reply protocol types
//! - `handler`: loader execution, failure capture and logging
//!
//! [`PostLoader`]: crate::storage::PostLoader

pub mod handler;
pub mod messages;

pub use handler::run_load;
pub use messages::{LoadReply, LoadRequest};
