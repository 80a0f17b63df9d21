//! Legend-driven visibility filtering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tracks which dataset indices the legend has toggled off.
///
/// The set is bounded by the dataset length: out-of-range toggles are
/// ignored, and the set is cleared whenever the dataset length changes so
/// hidden indices always reference valid entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibilitySet {
    hidden: BTreeSet<usize>,
    len: usize,
}

impl VisibilitySet {
    /// An all-visible set over a dataset of `len` items.
    pub fn new(len: usize) -> Self {
        Self {
            hidden: BTreeSet::new(),
            len,
        }
    }

    /// Number of dataset entries this set ranges over.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no index is hidden.
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    /// Flip membership of `index`. Indices outside the dataset are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            log::debug!("visibility toggle out of range: {} >= {}", index, self.len);
            return;
        }
        if !self.hidden.remove(&index) {
            self.hidden.insert(index);
        }
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.contains(&index)
    }

    /// Clear all hidden indices, rebinding to a dataset of `new_len` items.
    /// Called when the dataset changes.
    pub fn reset(&mut self, new_len: usize) {
        self.hidden.clear();
        self.len = new_len;
    }

    /// Indices still visible, in dataset order.
    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.len).filter(|i| !self.is_hidden(*i)).collect()
    }

    /// The dataset with hidden entries removed, preserving order. Each item
    /// is paired with its original index so colors and identities survive
    /// filtering.
    pub fn filtered<'a, T>(&self, items: &'a [T]) -> Vec<(usize, &'a T)> {
        items
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.is_hidden(*i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::VisibilitySet;

    #[test]
    fn test_toggle_twice_restores() {
        let items = ["a", "b", "c"];
        let mut set = VisibilitySet::new(items.len());
        let before: Vec<_> = set.filtered(&items);

        set.toggle(1);
        assert!(set.is_hidden(1));
        assert_eq!(set.filtered(&items).len(), 2);

        set.toggle(1);
        assert_eq!(set.filtered(&items), before);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut set = VisibilitySet::new(2);
        set.toggle(2);
        set.toggle(99);
        assert!(set.is_empty());
    }

    #[test]
    fn test_filtered_preserves_order() {
        let items = ["a", "b", "c", "d"];
        let mut set = VisibilitySet::new(items.len());
        set.toggle(0);
        set.toggle(2);
        let visible: Vec<_> = set.filtered(&items).into_iter().map(|(_, v)| *v).collect();
        assert_eq!(visible, ["b", "d"]);
        assert_eq!(set.visible_indices(), [1, 3]);
    }

    #[test]
    fn test_reset_on_dataset_change() {
        let mut set = VisibilitySet::new(3);
        set.toggle(2);
        set.reset(2);
        assert!(set.is_empty());
        assert_eq!(set.len(), 2);
        // The old index 2 is now out of range.
        set.toggle(2);
        assert!(set.is_empty());
    }
}
