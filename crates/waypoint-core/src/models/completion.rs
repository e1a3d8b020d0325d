//! Prefix-closed completion tracking.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Indices of completed plans.
///
/// The set is prefix-closed: whenever index `i` is present, every `j < i` is
/// present too. Mutators are crate-private and each one preserves the
/// invariant, so callers outside the engine cannot break it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<usize>);

impl CompletionSet {
    /// An empty completion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The set `{0, ..., len - 1}`.
    pub fn prefix(len: usize) -> Self {
        Self((0..len).collect())
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates completed indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Highest completed index, if any.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Whether the set currently forms a contiguous prefix.
    pub fn is_prefix_closed(&self) -> bool {
        self.0.iter().enumerate().all(|(pos, &index)| pos == index)
    }

    /// Completes `index` and everything before it.
    pub(crate) fn complete_through(&mut self, index: usize) {
        self.0.extend(0..=index);
    }

    /// Un-completes `index` and everything after it.
    pub(crate) fn uncomplete_from(&mut self, index: usize) {
        self.0.retain(|&i| i < index);
    }

    /// Accounts for the removal of the plan at `index`: the index itself is
    /// dropped and every higher index moves down by one.
    pub(crate) fn remove_and_renumber(&mut self, index: usize) {
        self.0 = self
            .0
            .iter()
            .filter(|&&i| i != index)
            .map(|&i| if i > index { i - 1 } else { i })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_constructor() {
        let set = CompletionSet::prefix(3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(set.is_prefix_closed());
        assert!(CompletionSet::prefix(0).is_empty());
    }

    #[test]
    fn test_complete_through_cascades_backwards() {
        let mut set = CompletionSet::new();
        set.complete_through(4);
        assert_eq!(set.len(), 5);
        assert_eq!(set.last(), Some(4));
        assert!(set.is_prefix_closed());
    }

    #[test]
    fn test_uncomplete_from_cascades_forwards() {
        let mut set = CompletionSet::prefix(6);
        set.uncomplete_from(2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_remove_and_renumber() {
        let mut set = CompletionSet::prefix(3);
        set.remove_and_renumber(1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1]);

        let mut untouched = CompletionSet::prefix(2);
        untouched.remove_and_renumber(4);
        assert_eq!(untouched, CompletionSet::prefix(2));
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let json = serde_json::to_string(&CompletionSet::prefix(2)).unwrap();
        assert_eq!(json, "[0,1]");
    }
}
