use tracing::{debug, trace};

use crate::layout::{Layout, Options};

impl Layout {
    /// Moves an item to `to_idx` in column `to_column`.
    ///
    /// `to_idx` is an insertion index into the target column as it looks *before* the move, the
    /// way a drop indicator computes it. When moving down within the same column the index is
    /// shifted up by one to account for the removal.
    ///
    /// Both columns are rescaled to 100 afterwards. If `to_column` doesn't exist the item is
    /// still taken out of its source column and dropped.
    pub fn move_item(
        &mut self,
        from_column: usize,
        from_idx: usize,
        to_column: usize,
        to_idx: usize,
        options: &Options,
    ) -> bool {
        let Some(source) = self.columns.get_mut(from_column) else {
            debug!("cannot move from missing column {from_column}");
            return false;
        };

        let Some(item) = source.remove_item(from_idx, options.epsilon) else {
            debug!("no item {from_idx} in column {from_column}");
            return false;
        };

        let mut to_idx = to_idx;
        if from_column == to_column && from_idx < to_idx {
            to_idx -= 1;
        }

        let Some(target) = self.columns.get_mut(to_column) else {
            debug!(
                "target column {to_column} is missing, discarding {} from {from_column}:{from_idx}",
                item.kind
            );
            return true;
        };

        let idx = target.add_moved_item(to_idx, item, options.epsilon);
        trace!("moved {from_column}:{from_idx} to {to_column}:{idx}");
        true
    }
}
