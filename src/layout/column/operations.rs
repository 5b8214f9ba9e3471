// Column item operations (add, remove)

use super::Column;
use crate::layout::item::Item;
use crate::layout::normalize::{self, Degenerate};

impl Column {
    /// Inserts a new item and rescales the stack to 100.
    ///
    /// `idx` outside `0..=len` appends. Returns the index the item ended up at.
    pub(crate) fn add_item(&mut self, idx: Option<usize>, item: Item) -> usize {
        let idx = match idx {
            Some(idx) if idx <= self.items.len() => idx,
            _ => self.items.len(),
        };

        self.items.insert(idx, item);
        normalize::renormalize(&mut self.items, 0., Degenerate::Skip);
        idx
    }

    /// Inserts an item that was taken from elsewhere in the layout.
    ///
    /// `idx` past the end appends.
    pub(crate) fn add_moved_item(&mut self, idx: usize, item: Item, epsilon: f64) -> usize {
        let idx = idx.min(self.items.len());
        self.items.insert(idx, item);
        normalize::renormalize(&mut self.items, epsilon, Degenerate::EvenSplit);
        idx
    }

    /// Removes an item and rescales the remaining ones to 100.
    ///
    /// When the remaining items add up to (almost) nothing they are split evenly instead.
    pub(crate) fn remove_item(&mut self, idx: usize, epsilon: f64) -> Option<Item> {
        if idx >= self.items.len() {
            return None;
        }

        let item = self.items.remove(idx);
        normalize::renormalize(&mut self.items, epsilon, Degenerate::EvenSplit);
        Some(item)
    }
}
