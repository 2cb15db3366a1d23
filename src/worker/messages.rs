//! Load request and reply types.
//!
//! This module defines the protocol between the state container and the load
//! worker. Every message carries the [`Generation`] it belongs to, so replies
//! can be matched against the most recent request when they come back.

use crate::app::load::Generation;
use crate::domain::{LoadFailure, Post};
use serde::{Deserialize, Serialize};

/// Request to fetch the current post collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    /// Generation issued when the request was made.
    pub generation: Generation,
}

impl LoadRequest {
    #[must_use]
    pub const fn new(generation: Generation) -> Self {
        Self { generation }
    }
}

/// Outcome of running a [`LoadRequest`] through a loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadReply {
    /// The loader resolved with posts.
    Loaded {
        /// Generation of the originating request.
        generation: Generation,

        /// Posts in repository order.
        posts: Vec<Post>,
    },

    /// The loader rejected or panicked.
    Failed {
        /// Generation of the originating request.
        generation: Generation,

        /// Recorded failure, including the underlying cause.
        failure: LoadFailure,
    },
}

impl LoadReply {
    #[must_use]
    pub const fn generation(&self) -> Generation {
        match self {
            Self::Loaded { generation, .. } | Self::Failed { generation, .. } => *generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_round_trips_through_json() {
        let reply = LoadReply::Failed {
            generation: Generation(3),
            failure: LoadFailure::new("offline"),
        };

        let json = serde_json::to_string(&reply).unwrap();
        let decoded: LoadReply = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, reply);
        assert_eq!(decoded.generation(), Generation(3));
    }
}
