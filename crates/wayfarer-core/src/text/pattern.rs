//! Regular-expression matching for free-text queries.
//!
//! Patterns come straight from end users, so a pattern that fails to
//! compile is an ordinary "no match", never an error.

use super::fuzzy::TextMatch;
use regex::{Regex, RegexBuilder};

pub(super) fn compile(pattern: &str, case_sensitive: bool) -> Option<Regex> {
    match RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
    {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::debug!("Ignoring invalid search pattern {:?}: {}", pattern, e);
            None
        }
    }
}

/// Returns true if `pattern` matches anywhere in `text`.
///
/// Invalid patterns never match.
#[must_use]
pub fn regex_match(text: &str, pattern: &str, case_sensitive: bool) -> bool {
    compile(pattern, case_sensitive).is_some_and(|regex| regex.is_match(text))
}

/// Finds the leftmost match of `pattern` in `text`.
///
/// Returns `None` if there is no match, either input is empty, or the
/// pattern is invalid.
#[must_use]
pub fn find_regex_match(text: &str, pattern: &str, case_sensitive: bool) -> Option<TextMatch> {
    if text.is_empty() || pattern.is_empty() {
        return None;
    }

    let regex = compile(pattern, case_sensitive)?;
    let found = regex.find(text)?;
    Some(TextMatch {
        position: text[..found.start()].chars().count(),
        length: found.as_str().chars().count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_match() {
        assert!(regex_match("Route 66", r"\d+", true));
        assert!(regex_match("Route 66", "route", false));
        assert!(!regex_match("Route 66", "route", true));
    }

    #[test]
    fn test_invalid_pattern_is_no_match() {
        assert!(!regex_match("a(b", "(b", false));
        assert_eq!(find_regex_match("a[b", "[b", false), None);
    }

    #[test]
    fn test_find_regex_match() {
        assert_eq!(
            find_regex_match("Platform 9 and 3/4", r"\d+", true),
            Some(TextMatch {
                position: 9,
                length: 1
            })
        );
        assert_eq!(
            find_regex_match("Köln Hbf", "HBF", false),
            Some(TextMatch {
                position: 5,
                length: 3
            })
        );
        assert_eq!(find_regex_match("abc", "x+", true), None);
        assert_eq!(find_regex_match("", "a", true), None);
        assert_eq!(find_regex_match("abc", "", true), None);
    }
}
