use tracing::{debug, trace};

use crate::layout::normalize::{self, clamp_transfer, FULL};
use crate::layout::{Layout, Options};

impl Layout {
    /// Moves `delta` percent of width from column `column_idx + 1` into `column_idx`.
    ///
    /// Negative deltas widen the right column instead. Neither column can end up narrower than
    /// the column width floor; a transfer that clamps to nothing leaves the layout untouched.
    pub fn resize_column_pair(&mut self, column_idx: usize, delta: f64, options: &Options) -> bool {
        if column_idx >= self.columns.len().saturating_sub(1) {
            debug!(
                "no column pair at {column_idx} with {} columns",
                self.columns.len()
            );
            return false;
        }

        let left = self.columns[column_idx].width_percentage;
        let right = self.columns[column_idx + 1].width_percentage;
        let Some(delta) = clamp_transfer(
            delta,
            left,
            right,
            options.column_width_floor,
            options.epsilon,
        ) else {
            return false;
        };

        self.columns[column_idx].width_percentage += delta;
        self.columns[column_idx + 1].width_percentage -= delta;
        trace!("moved {delta}% of width into column {column_idx}");
        true
    }

    /// Moves `delta` percent of height from item `item_idx + 1` into `item_idx`.
    pub fn resize_item_pair(
        &mut self,
        column_idx: usize,
        item_idx: usize,
        delta: f64,
        options: &Options,
    ) -> bool {
        let Some(column) = self.columns.get_mut(column_idx) else {
            debug!("cannot resize items in missing column {column_idx}");
            return false;
        };

        let resized = column.resize_item_pair(
            item_idx,
            delta,
            options.item_height_floor,
            options.epsilon,
        );
        if resized {
            trace!("resized item pair at {column_idx}:{item_idx} by {delta}%");
        }
        resized
    }

    /// Gives every column the same width.
    pub fn equalize_columns(&mut self) -> bool {
        if self.columns.is_empty() {
            debug!("no columns to equalize");
            return false;
        }

        let width = FULL / self.columns.len() as f64;
        let changed = self.columns.iter().any(|col| col.width_percentage != width);
        normalize::even_split(&mut self.columns);
        trace!("equalized {} columns", self.columns.len());
        changed
    }
}
