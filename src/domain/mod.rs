//! Domain layer for the blogview store.
//!
//! This module contains the core domain types, independent of how posts are
//! fetched or how the listing is rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`post`]: Post and comment models
//!
//! # Examples
//!
//! ```
//! use blogview::domain::{Post, Result};
//!
//! fn first_post() -> Result<Post> {
//!     Ok(Post::new(1, "Hello").with_tags(["intro"]))
//! }
//! # assert_eq!(first_post().unwrap().id, 1);
//! ```

pub mod error;
pub mod post;

pub use error::{BlogviewError, LoadFailure, Result};
pub use post::{parse_timestamp, reading_time_minutes, Post, PostComment, PostId};
