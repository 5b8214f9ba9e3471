use tracing::{debug, trace};

use crate::layout::types::Target;
use crate::layout::{Layout, Options};

impl Layout {
    /// Deletes an item, or the top shelf band when `target` is [`Target::TopShelf`].
    ///
    /// Deleting the top shelf only zeroes its height; `item_idx` is ignored and no column is
    /// touched. The remaining items of a column are rescaled to 100.
    pub fn delete_item(&mut self, target: Target, item_idx: usize, options: &Options) -> bool {
        let column_idx = match target {
            Target::TopShelf => return self.delete_top_shelf(),
            Target::Column(idx) => idx,
        };

        let Some(column) = self.columns.get_mut(column_idx) else {
            debug!("cannot delete from missing column {column_idx}");
            return false;
        };

        match column.remove_item(item_idx, options.epsilon) {
            Some(item) => {
                trace!("deleted {} at {column_idx}:{item_idx}", item.kind);
                true
            }
            None => {
                debug!("no item {item_idx} in column {column_idx}");
                false
            }
        }
    }

    fn delete_top_shelf(&mut self) -> bool {
        match self.top_shelf_height_percentage {
            Some(percentage) if percentage != 0. => {
                self.top_shelf_height_percentage = Some(0.);
                trace!("deleted top shelf");
                true
            }
            _ => {
                debug!("no top shelf to delete");
                false
            }
        }
    }
}
