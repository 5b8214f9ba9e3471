use tracing::{debug, trace};

use crate::layout::item::Item;
use crate::layout::types::SectionType;
use crate::layout::{Layout, Options};

impl Layout {
    /// Inserts a new item of `kind` into a column.
    ///
    /// The item starts at the default height for its kind and the column is then rescaled to
    /// 100, so the final share is `default / (100 + default)` for a full column. An index
    /// outside `0..=len` (or none at all) appends.
    pub fn insert_item(
        &mut self,
        column_idx: usize,
        kind: SectionType,
        insert_idx: Option<usize>,
        options: &Options,
    ) -> bool {
        let Some(column) = self.columns.get_mut(column_idx) else {
            debug!("cannot insert {kind} into missing column {column_idx}");
            return false;
        };

        let item = Item::new(kind, kind.default_height(&options.item_defaults));
        let idx = column.add_item(insert_idx, item);
        trace!("inserted {kind} at {column_idx}:{idx}");
        true
    }
}
