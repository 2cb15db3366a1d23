//! Derived listing view.
//!
//! Everything here is a pure function of the loaded posts and the current
//! [`FilterState`]. Nothing is cached: callers recompute on every read, so the
//! view can never lag behind its inputs.

use super::filters::FilterState;
use crate::domain::Post;
use crate::search::Matcher;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Returns the posts that pass both the tag gate and the search gate, in load
/// order.
///
/// # Filtering Algorithm
///
/// 1. **Tag gate**: when tags are selected, a post must carry every one of
///    them (exact, case-sensitive)
/// 2. **Search gate**: when the search term is non-empty, it must occur in
///    the post title (case-insensitive substring)
///
/// The search term is compiled once for the whole pass.
///
/// # Example
///
/// ```rust
/// use blogview::app::{filter_posts, FilterState};
/// use blogview::Post;
///
/// let posts = vec![
///     Post::new(1, "Vue Best Practices").with_tags(["vue", "js"]),
///     Post::new(2, "TS Tips").with_tags(["ts", "js"]),
/// ];
/// let mut filters = FilterState::default();
/// filters.set_search("Vue");
/// filters.toggle_tag("js");
///
/// let visible = filter_posts(&posts, &filters);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id, 1);
/// ```
#[must_use]
pub fn filter_posts<'a>(posts: &'a [Post], filters: &FilterState) -> Vec<&'a Post> {
    let _span = tracing::debug_span!(
        "filter_posts",
        total_posts = posts.len(),
        query_len = filters.search.len(),
        required_tags = filters.tags.len()
    )
    .entered();

    let matcher = if filters.search.is_empty() {
        None
    } else {
        Some(Matcher::new(&filters.search))
    };

    let filtered: Vec<&Post> = posts
        .iter()
        .filter(|post| filters.tags.iter().all(|tag| post.has_tag(tag)))
        .filter(|post| matcher.as_ref().map_or(true, |m| m.is_match(&post.title)))
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "listing filter applied");

    filtered
}

/// Returns every tag used by any loaded post, without duplicates, in order of
/// first appearance.
///
/// Independent of the filter state so chips stay selectable after filtering
/// narrows the listing.
#[must_use]
pub fn available_tags(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .flat_map(|post| post.tags.iter())
        .filter(|&tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

/// Owned snapshot of the listing, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogView {
    pub filtered_posts: Vec<Post>,
    pub available_tags: Vec<String>,
    pub filters_active: bool,
    pub search: String,
    pub active_tags: BTreeSet<String>,
    pub loading: bool,
    pub total_posts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posts() -> Vec<Post> {
        vec![
            Post::new(1, "Vue.js Best Practices").with_tags(["vue", "javascript", "frontend"]),
            Post::new(2, "TypeScript Tips").with_tags(["typescript", "javascript"]),
            Post::new(3, "React vs Vue").with_tags(["react", "vue", "comparison"]),
        ]
    }

    fn ids(posts: &[&Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let posts = sample_posts();

        assert_eq!(ids(&filter_posts(&posts, &FilterState::default())), vec![1, 2, 3]);
    }

    #[test]
    fn search_matches_titles_case_insensitively() {
        let posts = sample_posts();
        let mut filters = FilterState::default();
        filters.set_search("vue");

        assert_eq!(ids(&filter_posts(&posts, &filters)), vec![1, 3]);
    }

    #[test]
    fn single_tag_filter() {
        let posts = sample_posts();
        let mut filters = FilterState::default();
        filters.toggle_tag("javascript");

        assert_eq!(ids(&filter_posts(&posts, &filters)), vec![1, 2]);
    }

    #[test]
    fn multiple_tags_must_all_be_present() {
        let posts = vec![
            Post::new(1, "A").with_tags(["x", "y"]),
            Post::new(2, "B").with_tags(["x"]),
        ];
        let mut filters = FilterState::default();
        filters.toggle_tag("x");
        filters.toggle_tag("y");

        assert_eq!(ids(&filter_posts(&posts, &filters)), vec![1]);
    }

    #[test]
    fn search_and_tags_combine_conjunctively() {
        let posts = sample_posts();
        let mut filters = FilterState::default();
        filters.set_search("Vue");
        filters.toggle_tag("comparison");

        assert_eq!(ids(&filter_posts(&posts, &filters)), vec![3]);
    }

    #[test]
    fn blank_search_is_still_a_literal_pattern() {
        let posts = vec![Post::new(1, "Two  spaces"), Post::new(2, "One space")];
        let mut filters = FilterState::default();
        filters.set_search("  ");

        assert!(!filters.is_active());
        assert_eq!(ids(&filter_posts(&posts, &filters)), vec![1]);
    }

    #[test]
    fn unknown_tag_filters_everything_out() {
        let posts = sample_posts();
        let mut filters = FilterState::default();
        filters.toggle_tag("Vue");

        assert!(filter_posts(&posts, &filters).is_empty());
    }

    #[test]
    fn available_tags_is_deduplicated_union() {
        let posts = sample_posts();

        assert_eq!(
            available_tags(&posts),
            vec!["vue", "javascript", "frontend", "typescript", "react", "comparison"]
        );
        assert!(available_tags(&[]).is_empty());
    }
}
