//! Text matching with stored options.

use super::fuzzy::{self, TextMatch};
use super::pattern;

/// Default edit budget for per-token fuzzy matching.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Bundles case sensitivity and the fuzzy edit budget so callers ranking
/// many candidates against one query don't repeat them.
///
/// # Example
///
/// ```
/// use wayfarer_core::TextMatcher;
///
/// let matcher = TextMatcher::new().with_max_distance(1);
/// assert!(matcher.fuzzy_match("hello world", "hallo"));
/// assert_eq!(matcher.relevance("Berlin", "berlin"), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMatcher {
    case_sensitive: bool,
    max_distance: usize,
}

impl TextMatcher {
    /// Creates a case-insensitive matcher with [`DEFAULT_MAX_DISTANCE`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case_sensitive: false,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Sets case sensitivity.
    #[must_use]
    pub const fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the per-token edit budget for [`TextMatcher::fuzzy_match`].
    #[must_use]
    pub const fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Returns true if comparisons are case-sensitive.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns the per-token edit budget.
    #[must_use]
    pub const fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// See [`fuzzy::fuzzy_match`].
    #[must_use]
    pub fn fuzzy_match(&self, text: &str, query: &str) -> bool {
        fuzzy::fuzzy_match(text, query, self.max_distance, self.case_sensitive)
    }

    /// See [`fuzzy::relevance`].
    #[must_use]
    pub fn relevance(&self, text: &str, query: &str) -> f64 {
        fuzzy::relevance(text, query, self.case_sensitive)
    }

    /// See [`fuzzy::find_match`].
    #[must_use]
    pub fn find_match(&self, text: &str, query: &str) -> Option<TextMatch> {
        fuzzy::find_match(text, query, self.case_sensitive)
    }

    /// See [`pattern::regex_match`].
    #[must_use]
    pub fn regex_match(&self, text: &str, pattern: &str) -> bool {
        pattern::regex_match(text, pattern, self.case_sensitive)
    }

    /// See [`pattern::find_regex_match`].
    #[must_use]
    pub fn find_regex_match(&self, text: &str, pattern: &str) -> Option<TextMatch> {
        pattern::find_regex_match(text, pattern, self.case_sensitive)
    }
}

impl Default for TextMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matcher_defaults() {
        let matcher = TextMatcher::default();
        assert!(!matcher.case_sensitive());
        assert_eq!(matcher.max_distance(), DEFAULT_MAX_DISTANCE);
    }

    #[test]
    fn test_matcher_applies_options() {
        let strict = TextMatcher::new()
            .with_case_sensitive(true)
            .with_max_distance(0);

        assert!(!strict.fuzzy_match("Hello World", "hallo"));
        assert!(strict.find_match("Hello World", "world").is_none());
        assert!(!strict.regex_match("Hello", "hello"));

        let loose = TextMatcher::new().with_max_distance(1);
        assert!(loose.fuzzy_match("Hello World", "hallo"));
        assert_eq!(loose.find_match("Hello World", "world").map(|m| m.position), Some(6));
        assert_eq!(loose.find_regex_match("Hello", "L+").map(|m| m.length), Some(2));
    }
}
