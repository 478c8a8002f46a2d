//! Edit distance and fuzzy matching.

use std::borrow::Cow;

use super::pattern::compile;

/// Characters that separate tokens for per-token fuzzy matching.
pub const TOKEN_DELIMITERS: [char; 7] = [' ', ',', '.', ';', ':', '-', '_'];

/// Largest score deduction for a match that starts at the very end of the
/// text.
const POSITION_PENALTY: f64 = 0.3;

/// Location of a match inside a text, in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMatch {
    /// Offset of the first matched char.
    pub position: usize,
    /// Number of matched chars.
    pub length: usize,
}

/// Lowercases both inputs unless the comparison is case-sensitive.
fn normalize<'a>(text: &'a str, query: &'a str, case_sensitive: bool) -> (Cow<'a, str>, Cow<'a, str>) {
    if case_sensitive {
        (Cow::Borrowed(text), Cow::Borrowed(query))
    } else {
        (Cow::Owned(text.to_lowercase()), Cow::Owned(query.to_lowercase()))
    }
}

fn char_offset(text: &str, byte_index: usize) -> usize {
    text[..byte_index].chars().count()
}

/// Locates `query` as a literal inside `text`.
///
/// Offsets are taken from `text` itself. Lowercasing can change how many
/// chars a string has (`İ` becomes two), so a case-insensitive search runs
/// an escaped pattern over the original text instead of comparing
/// lowercased copies.
fn locate(text: &str, query: &str, case_sensitive: bool) -> Option<TextMatch> {
    let (start, end) = if case_sensitive {
        let start = text.find(query)?;
        (start, start + query.len())
    } else {
        let found = compile(&regex::escape(query), false)?.find(text)?;
        (found.start(), found.end())
    };
    Some(TextMatch {
        position: char_offset(text, start),
        length: text[start..end].chars().count(),
    })
}

/// Levenshtein distance between two strings, counted in chars.
///
/// Insertions, deletions, and substitutions all cost 1.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the (|a|+1) x (|b|+1) table are enough.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Returns true if `query` occurs in `text`, or if any token of `text` is
/// within `max_distance` edits of `query`.
///
/// Tokens are split on [`TOKEN_DELIMITERS`]; empty tokens are ignored.
#[must_use]
pub fn fuzzy_match(text: &str, query: &str, max_distance: usize, case_sensitive: bool) -> bool {
    let (text, query) = normalize(text, query, case_sensitive);

    if text.contains(&*query) {
        return true;
    }

    text.split(|c: char| TOKEN_DELIMITERS.contains(&c))
        .filter(|token| !token.is_empty())
        .any(|token| edit_distance(token, &query) <= max_distance)
}

/// Scores how well `text` answers `query`, in `[0, 1]`.
///
/// - Equal strings score exactly `1.0`.
/// - Containment averages a position score (earlier is better, losing at
///   most `0.3`) with the share of `text` covered by `query`.
/// - Otherwise the score is one minus the edit distance normalized by the
///   longer string, floored at `0`.
///
/// An empty query scores `0` even though every text contains it; the
/// containment formula would otherwise give any non-empty text about
/// `0.5` for a query that says nothing.
///
/// Containment positions and lengths are counted in the chars of `text`
/// as given, not of its lowercased form.
#[must_use]
pub fn relevance(text: &str, query: &str, case_sensitive: bool) -> f64 {
    if query.is_empty() {
        return 0.0;
    }

    let (folded_text, folded_query) = normalize(text, query, case_sensitive);
    if folded_text == folded_query {
        return 1.0;
    }

    if let Some(found) = locate(text, query, case_sensitive) {
        let text_len = text.chars().count() as f64;
        let position_score = 1.0 - (found.position as f64 / text_len) * POSITION_PENALTY;
        let length_score = found.length as f64 / text_len;
        return ((position_score + length_score) / 2.0).min(1.0);
    }

    let distance = edit_distance(&folded_text, &folded_query) as f64;
    let longest = folded_text
        .chars()
        .count()
        .max(folded_query.chars().count()) as f64;
    (1.0 - distance / longest).max(0.0)
}

/// Finds the first occurrence of `query` in `text`.
///
/// The position and length index the chars of `text` as given, so
/// `text.chars().skip(position).take(length)` is the matched slice.
/// Returns `None` if there is no occurrence or either input is empty.
#[must_use]
pub fn find_match(text: &str, query: &str, case_sensitive: bool) -> Option<TextMatch> {
    if text.is_empty() || query.is_empty() {
        return None;
    }

    locate(text, query, case_sensitive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abcd"), 4);
        assert_eq!(edit_distance("abc", "abc"), 0);
        assert_eq!(edit_distance("abc", "ab"), 1);
        assert_eq!(edit_distance("abc", "adc"), 1);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_edit_distance_counts_chars() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("straße", "strasse"), 2);
    }

    #[test]
    fn test_fuzzy_match_substring() {
        assert!(fuzzy_match("hello world", "lo wo", 0, false));
        assert!(fuzzy_match("Hello World", "WORLD", 0, false));
        assert!(!fuzzy_match("Hello World", "WORLD", 0, true));
    }

    #[test]
    fn test_fuzzy_match_tokens() {
        assert!(fuzzy_match("hello world", "hallo", 1, false));
        assert!(!fuzzy_match("hello world", "hxllx", 1, false));
        assert!(fuzzy_match("north-east_gate", "gute", 1, false));
        assert!(fuzzy_match("a,,b;;berlin", "berlim", 1, false));
    }

    #[test]
    fn test_relevance_exact() {
        assert_eq!(relevance("Berlin", "berlin", false), 1.0);
        assert!(relevance("Berlin", "berlin", true) < 1.0);
    }

    #[test]
    fn test_relevance_containment() {
        // Match at position 0 of a 10 char text covering 5 chars
        let score = relevance("helloworld", "hello", false);
        assert!((score - 0.75).abs() < 1e-9);

        // Later matches score lower
        let late = relevance("worldhello", "hello", false);
        assert!(late < score);
        assert!((late - (1.0 - 0.5 * 0.3 + 0.5) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_relevance_edit_distance() {
        let score = relevance("hello", "hallo", false);
        assert!((score - 0.8).abs() < 1e-9);
        assert_eq!(relevance("abc", "xyz", false), 0.0);
    }

    #[test]
    fn test_relevance_empty_inputs() {
        assert_eq!(relevance("", "", false), 0.0);
        assert_eq!(relevance("text", "", false), 0.0);
        assert_eq!(relevance("", "query", false), 0.0);
    }

    #[test]
    fn test_find_match() {
        assert_eq!(
            find_match("Hello World", "world", false),
            Some(TextMatch {
                position: 6,
                length: 5
            })
        );
        assert_eq!(find_match("Hello World", "world", true), None);
        assert_eq!(find_match("", "a", false), None);
        assert_eq!(find_match("a", "", false), None);
    }

    #[test]
    fn test_find_match_positions_are_chars() {
        let m = find_match("über alles", "alles", false).unwrap();
        assert_eq!(m.position, 5);
        assert_eq!(m.length, 5);
    }

    #[test]
    fn test_find_match_indexes_original_text_when_lowercase_grows() {
        // 'İ' lowercases to two chars
        let text = "İstanbul x";
        let m = find_match(text, "x", false).unwrap();
        assert_eq!(m, TextMatch { position: 9, length: 1 });
        assert_eq!(text.chars().nth(m.position), Some('x'));

        let m = find_match("İSTANBUL", "stan", false).unwrap();
        assert_eq!(m, TextMatch { position: 1, length: 4 });
        let matched: String = "İSTANBUL".chars().skip(m.position).take(m.length).collect();
        assert_eq!(matched, "STAN");
    }

    #[test]
    fn test_find_match_escapes_query() {
        assert_eq!(
            find_match("Gate (North)", "(north)", false),
            Some(TextMatch {
                position: 5,
                length: 7
            })
        );
        assert_eq!(find_match("a.c", "a.c", false).map(|m| m.position), Some(0));
        assert_eq!(find_match("abc", "a.c", false), None);
    }

    #[test]
    fn test_relevance_containment_counts_original_chars() {
        // Match at char 9 of 10, covering 1 char
        let score = relevance("İstanbul x", "X", false);
        assert!((score - (1.0 - 0.9 * 0.3 + 0.1) / 2.0).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&score));
    }
}
