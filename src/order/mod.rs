//! List ordering.
//!
//! The emitted list is consumed by a greedy suffix matcher that tests
//! entries in iteration order, so for any token that is a proper suffix of
//! another, the longer one must come first. Tool lineage disagrees on how
//! that is achieved; both historical policies are modeled here and the
//! choice is explicit in the configuration.

use clap::ValueEnum;
use strum_macros::EnumIter;

use crate::aggregate::TldSet;

/// Ordering policy for the emitted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, EnumIter)]
pub enum OrderPolicy {
    /// Sort descending by full string value (the default, matching the most
    /// common generation rule in this tool family). Orders every
    /// suffix-overlapping pair found in real registry data longest-first.
    #[value(name = "reverse-lex")]
    ReverseLexicographic,

    /// Sort by descending token length, ascending lexicographic tie-break.
    /// Guarantees the longest-match-first law for arbitrary token sets.
    #[value(name = "longest-first")]
    LongestFirst,
}

/// Materializes the merged set as a sequence under the chosen policy.
///
/// The result is deterministic for a given set and policy; equal-length
/// ties under [`OrderPolicy::LongestFirst`] break ascending
/// lexicographically.
pub fn order_tokens(set: TldSet, policy: OrderPolicy) -> Vec<String> {
    let mut tokens: Vec<String> = set.into_inner().into_iter().collect();
    match policy {
        OrderPolicy::ReverseLexicographic => tokens.sort_by(|a, b| b.cmp(a)),
        OrderPolicy::LongestFirst => {
            tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use strum::IntoEnumIterator;

    use super::*;

    fn tld_set(values: &[&str]) -> TldSet {
        let mut set = TldSet::new();
        set.merge(values.iter().map(|v| v.to_string()).collect::<BTreeSet<_>>());
        set
    }

    #[test]
    fn test_reverse_lex_orders_descending() {
        let ordered = order_tokens(tld_set(&["com", "net"]), OrderPolicy::ReverseLexicographic);
        assert_eq!(ordered, vec!["net", "com"]);
    }

    #[test]
    fn test_reverse_lex_puts_proper_suffix_after_its_extension() {
        // "ample" is a proper suffix of "example"; the longer token must
        // come first so a greedy matcher finds it first
        let ordered = order_tokens(
            tld_set(&["ample", "example"]),
            OrderPolicy::ReverseLexicographic,
        );
        assert_eq!(ordered, vec!["example", "ample"]);
    }

    #[test]
    fn test_longest_first_orders_by_length() {
        let ordered = order_tokens(
            tld_set(&["io", "museum", "travel", "com"]),
            OrderPolicy::LongestFirst,
        );
        assert_eq!(ordered, vec!["museum", "travel", "com", "io"]);
    }

    #[test]
    fn test_longest_first_holds_for_synthetic_suffix_pairs() {
        // A pair where reverse-lex alone would order the shorter token
        // first; length-major ordering must not
        let ordered = order_tokens(tld_set(&["zz", "azz"]), OrderPolicy::LongestFirst);
        assert_eq!(ordered, vec!["azz", "zz"]);
    }

    #[test]
    fn test_longest_first_breaks_equal_length_ties_ascending() {
        let ordered = order_tokens(tld_set(&["net", "com", "org"]), OrderPolicy::LongestFirst);
        assert_eq!(ordered, vec!["com", "net", "org"]);
    }

    #[test]
    fn test_every_policy_is_deterministic() {
        for policy in OrderPolicy::iter() {
            let first = order_tokens(tld_set(&["aaa", "bb", "c", "xn--abc"]), policy);
            let second = order_tokens(tld_set(&["aaa", "bb", "c", "xn--abc"]), policy);
            assert_eq!(first, second, "{policy:?} must be deterministic");
        }
    }
}
