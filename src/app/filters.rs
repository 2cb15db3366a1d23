//! Mutable listing filter: a free-text search term plus required tags.

use std::collections::BTreeSet;

/// User-controlled filter inputs for the post listing.
///
/// Mutated only through its own actions; the derived view reads it but never
/// writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Search term, stored verbatim. Matched against post titles.
    pub search: String,

    /// Tags every visible post must carry.
    pub tags: BTreeSet<String>,
}

impl FilterState {
    /// Replaces the search term. Returns true if it changed.
    ///
    /// No trimming happens here; whitespace only matters for
    /// [`is_active`](Self::is_active).
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.search == term {
            return false;
        }
        self.search = term;
        true
    }

    /// Adds `tag` if absent, removes it if present.
    ///
    /// Returns whether the tag is active afterwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blogview::app::FilterState;
    ///
    /// let mut filters = FilterState::default();
    /// assert!(filters.toggle_tag("vue"));
    /// assert!(!filters.toggle_tag("vue"));
    /// assert!(!filters.is_tag_active("vue"));
    /// ```
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    #[must_use]
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Clears the search term and all tags. Returns true if anything changed.
    pub fn reset(&mut self) -> bool {
        let changed = !self.search.is_empty() || !self.tags.is_empty();
        self.search.clear();
        self.tags.clear();
        changed
    }

    /// True when a non-blank search term or at least one tag is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_self_inverse() {
        let mut filters = FilterState::default();
        let before = filters.clone();

        filters.toggle_tag("vue");
        assert!(filters.is_tag_active("vue"));

        filters.toggle_tag("vue");
        assert_eq!(filters, before);
    }

    #[test]
    fn search_is_stored_verbatim() {
        let mut filters = FilterState::default();

        assert!(filters.set_search("  Vue "));
        assert_eq!(filters.search, "  Vue ");
        assert!(!filters.set_search("  Vue "));
    }

    #[test]
    fn blank_search_is_not_active() {
        let mut filters = FilterState::default();
        assert!(!filters.is_active());

        filters.set_search("   ");
        assert!(!filters.is_active());

        filters.set_search("test");
        assert!(filters.is_active());

        filters.set_search("");
        filters.toggle_tag("vue");
        assert!(filters.is_active());
    }

    #[test]
    fn reset_always_deactivates() {
        let mut filters = FilterState::default();
        filters.set_search("test");
        filters.toggle_tag("vue");
        filters.toggle_tag("javascript");

        assert!(filters.reset());

        assert_eq!(filters.search, "");
        assert!(filters.tags.is_empty());
        assert!(!filters.is_active());
        assert!(!filters.reset());
    }

    #[test]
    fn tags_are_case_sensitive() {
        let mut filters = FilterState::default();
        filters.toggle_tag("Vue");

        assert!(filters.is_tag_active("Vue"));
        assert!(!filters.is_tag_active("vue"));
    }
}
