//! Wire models for post repository responses.
//!
//! These types mirror the repository's response shape and stay separate from
//! the domain [`Post`] list the store keeps.

use crate::domain::Post;
use serde::{Deserialize, Serialize};

/// Response envelope returned by a post repository: `{ "data": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsEnvelope {
    /// Posts in repository order.
    #[serde(default)]
    pub data: Vec<Post>,
}

impl PostsEnvelope {
    #[must_use]
    pub fn new(data: Vec<Post>) -> Self {
        Self { data }
    }
}

impl From<Vec<Post>> for PostsEnvelope {
    fn from(data: Vec<Post>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_key_is_an_empty_list() {
        let envelope: PostsEnvelope = serde_json::from_str("{}").unwrap();

        assert!(envelope.data.is_empty());
    }

    #[test]
    fn keeps_repository_order() {
        let json = r#"{"data": [
            {"id": 2, "title": "Second", "created_at": "2025-01-02T00:00:00Z"},
            {"id": 1, "title": "First", "created_at": "2025-01-01T00:00:00Z"}
        ]}"#;

        let envelope: PostsEnvelope = serde_json::from_str(json).unwrap();
        let ids: Vec<u64> = envelope.data.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![2, 1]);
    }
}
