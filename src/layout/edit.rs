use super::types::{ItemUpdate, SectionType, Target};

/// One engine operation with its parameters.
///
/// This is the only way the rest of the program changes a design. See
/// [`Design::apply`](super::Design::apply).
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Add a new item of `kind`, at `index` or at the bottom of the column.
    InsertItem {
        column: usize,
        kind: SectionType,
        index: Option<usize>,
    },
    /// Remove an item, or the top shelf band.
    DeleteItem { target: Target, item: usize },
    /// Move an item; `to_item` is an insertion index computed before the move.
    MoveItem {
        from_column: usize,
        from_item: usize,
        to_column: usize,
        to_item: usize,
    },
    /// Move `delta` percent of width from column `column + 1` into `column`.
    ResizeColumnPair { column: usize, delta: f64 },
    /// Move `delta` percent of height from item `item + 1` into `item`.
    ResizeItemPair {
        column: usize,
        item: usize,
        delta: f64,
    },
    EqualizeColumns,
    /// Numeric edit with real-unit sizes.
    UpdateItem {
        target: Target,
        item: usize,
        update: ItemUpdate,
    },
    /// Replace the feature list.
    UpdateFeatures(Vec<String>),
}

impl Edit {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Edit::InsertItem { .. } => "insert-item",
            Edit::DeleteItem { .. } => "delete-item",
            Edit::MoveItem { .. } => "move-item",
            Edit::ResizeColumnPair { .. } => "resize-columns",
            Edit::ResizeItemPair { .. } => "resize-items",
            Edit::EqualizeColumns => "equalize",
            Edit::UpdateItem { .. } => "update-item",
            Edit::UpdateFeatures(_) => "set-features",
        }
    }
}
