//! Property tests for the text matching primitives.

use proptest::prelude::*;
use wayfarer_core::text::{edit_distance, find_match, fuzzy_match, relevance};

fn word() -> impl Strategy<Value = String> {
    "[a-dA-D ._-]{0,12}"
}

proptest! {
    #[test]
    fn edit_distance_identity(s in word()) {
        prop_assert_eq!(edit_distance(&s, &s), 0);
    }

    #[test]
    fn edit_distance_symmetric(a in word(), b in word()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn edit_distance_triangle(a in word(), b in word(), c in word()) {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }

    #[test]
    fn edit_distance_bounded_by_longer(a in word(), b in word()) {
        let longer = a.chars().count().max(b.chars().count());
        let diff = a.chars().count().abs_diff(b.chars().count());
        let d = edit_distance(&a, &b);
        prop_assert!(d <= longer);
        prop_assert!(d >= diff);
    }

    #[test]
    fn relevance_in_unit_interval(text in word(), query in word(), case_sensitive in any::<bool>()) {
        let score = relevance(&text, &query, case_sensitive);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn relevance_exact_is_one(s in "[a-z]{1,12}") {
        prop_assert_eq!(relevance(&s, &s, true), 1.0);
        prop_assert_eq!(relevance(&s.to_uppercase(), &s, false), 1.0);
    }

    #[test]
    fn substring_always_fuzzy_matches(
        text in "[a-dA-D ._-]{1,12}",
        start in any::<prop::sample::Index>(),
        len in 1usize..6,
    ) {
        let chars: Vec<char> = text.chars().collect();
        let start = start.index(chars.len());
        let end = (start + len).min(chars.len());
        let query: String = chars[start..end].iter().collect();

        prop_assert!(fuzzy_match(&text, &query, 0, true));
        let found = find_match(&text, &query, true);
        prop_assert!(found.is_some());
        prop_assert!(found.unwrap().position <= start);
    }

    #[test]
    fn case_insensitive_match_stays_inside_text(
        text in "[a-cA-CİıßÅå x]{1,12}",
        start in any::<prop::sample::Index>(),
        len in 1usize..6,
    ) {
        let chars: Vec<char> = text.chars().collect();
        let start = start.index(chars.len());
        let end = (start + len).min(chars.len());
        let query: String = chars[start..end].iter().collect();

        let found = find_match(&text, &query, false);
        prop_assert!(found.is_some());
        let found = found.unwrap();
        prop_assert!(found.position <= start);
        prop_assert!(found.position + found.length <= chars.len());
    }
}
