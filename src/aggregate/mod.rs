//! Cross-source aggregation.
//!
//! The merged token set for one run. Tokens are normalized identically
//! before they arrive here, so a collision across sources is definitionally
//! the same token and simple set union is the whole merge policy. The set is
//! owned by the run and consumed by the orderer; nothing survives the run.

use std::collections::{BTreeSet, HashSet};

/// The deduplicated collection of TLD tokens accumulated across all sources
/// for one run.
#[derive(Debug, Default)]
pub struct TldSet {
    tokens: HashSet<String>,
}

impl TldSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one source's token set in, returning how many tokens were new.
    ///
    /// No source takes precedence when duplicates occur; a token present in
    /// multiple sources is stored once.
    pub fn merge(&mut self, tokens: BTreeSet<String>) -> usize {
        let before = self.tokens.len();
        self.tokens.extend(tokens);
        self.tokens.len() - before
    }

    /// Number of unique tokens accumulated so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consumes the set, handing the tokens to the orderer.
    pub fn into_inner(self) -> HashSet<String> {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_merge_unions_across_sources() {
        let mut set = TldSet::new();
        assert_eq!(set.merge(tokens(&["com", "net"])), 2);
        assert_eq!(set.merge(tokens(&["net", "org"])), 1);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_overlapping_token_stored_once() {
        let mut set = TldSet::new();
        set.merge(tokens(&["net"]));
        set.merge(tokens(&["net"]));
        let inner = set.into_inner();
        assert_eq!(inner.len(), 1);
        assert!(inner.contains("net"));
    }

    #[test]
    fn test_new_set_is_empty() {
        let set = TldSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
