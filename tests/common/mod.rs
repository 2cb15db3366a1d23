//! Shared fixtures for blogview integration tests.

#![allow(dead_code)]

use blogview::storage::{PostLoader, PostsEnvelope};
use blogview::{BlogviewError, Post, Result};
use chrono::{TimeZone, Utc};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;

/// The three posts used across the listing tests.
///
/// Timestamps are fixed so that two calls compare equal.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(1, "Vue.js Best Practices").with_tags(["vue", "javascript", "frontend"]),
        Post::new(2, "TypeScript Tips").with_tags(["typescript", "javascript"]),
        Post::new(3, "React vs Vue").with_tags(["react", "vue", "comparison"]),
    ]
    .into_iter()
    .map(|mut post| {
        post.created_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        post
    })
    .collect()
}

pub fn titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}

pub type Reply = Result<PostsEnvelope>;

/// Builds a loader whose n-th load resolves when the n-th returned sender
/// fires, letting a test decide the order in which loads complete.
pub fn scripted_loader(loads: usize) -> (impl PostLoader + 'static, Vec<oneshot::Sender<Reply>>) {
    let (senders, receivers): (Vec<_>, VecDeque<_>) =
        (0..loads).map(|_| oneshot::channel::<Reply>()).unzip();
    let pending = RefCell::new(receivers);

    let loader = move || {
        let receiver = pending.borrow_mut().pop_front();
        async move {
            match receiver {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(BlogviewError::Loader("reply dropped".to_string()))),
                None => Err(BlogviewError::Loader("no scripted reply left".to_string())),
            }
        }
    };

    (loader, senders)
}

pub fn ok(posts: Vec<Post>) -> Reply {
    Ok(PostsEnvelope::new(posts))
}
