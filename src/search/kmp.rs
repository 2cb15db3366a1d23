//! Case-insensitive exact substring matching via Knuth-Morris-Pratt.
//!
//! Both operands are lowercased as whole strings before comparison, so
//! context-sensitive mappings (a word-final capital sigma becomes `ς`) apply
//! the same way to the pattern and to every text.
//! The pattern's prefix function is computed once in O(m); the text is then
//! scanned in a single O(n) pass that never re-reads a character.

/// Computes the prefix function (failure table) of `pattern`.
///
/// `table[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
///
/// # Examples
///
/// ```
/// use blogview::search::prefix_function;
///
/// let pattern: Vec<char> = "ABABAC".chars().collect();
/// assert_eq!(prefix_function(&pattern), vec![0, 0, 1, 2, 0, 1]);
/// ```
#[must_use]
pub fn prefix_function<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut len = 0;

    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = table[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        table[i] = len;
    }

    table
}

/// A compiled search pattern.
///
/// Compile once and test many texts; this is what the listing filter does so
/// the failure table is not rebuilt for every post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pattern: Vec<char>,
    table: Vec<usize>,
}

impl Matcher {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
        let table = prefix_function(&pattern);
        Self { pattern, table }
    }

    /// Returns true if the compiled pattern is empty and therefore matches
    /// every text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Returns true if the pattern occurs in `text`, ignoring case.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        if self.pattern.is_empty() {
            return true;
        }

        let mut matched = 0;
        for c in text.to_lowercase().chars() {
            while matched > 0 && c != self.pattern[matched] {
                matched = self.table[matched - 1];
            }
            if c == self.pattern[matched] {
                matched += 1;
                if matched == self.pattern.len() {
                    return true;
                }
            }
        }

        false
    }
}

/// Returns true if `pattern` occurs in `text`, ignoring case.
///
/// An empty pattern matches every text, including the empty one. An empty
/// text matches no non-empty pattern.
///
/// # Examples
///
/// ```
/// use blogview::search::matches;
///
/// assert!(matches("Hello World", "WORLD"));
/// assert!(matches("ababab", "abab"));
/// assert!(!matches("hello world", "worlds"));
/// assert!(matches("", ""));
/// ```
#[must_use]
pub fn matches(text: &str, pattern: &str) -> bool {
    Matcher::new(pattern).is_match(text)
}
