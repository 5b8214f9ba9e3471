//! Item height operations within a column.

use tracing::debug;

use crate::layout::column::Column;
use crate::layout::normalize::{self, clamp_transfer};

impl Column {
    /// Moves `delta` percent of height from the item below `idx` into `idx`.
    ///
    /// Negative deltas move height the other way. The transfer is clamped so neither item drops
    /// below `floor`. Returns `false` without touching anything when the clamped transfer is
    /// smaller than `epsilon` or the pair doesn't exist.
    pub(crate) fn resize_item_pair(
        &mut self,
        idx: usize,
        delta: f64,
        floor: f64,
        epsilon: f64,
    ) -> bool {
        if idx >= self.items.len().saturating_sub(1) {
            debug!("no item pair at {idx} in a column of {}", self.items.len());
            return false;
        }

        let top = self.items[idx].height_percentage;
        let bottom = self.items[idx + 1].height_percentage;

        let Some(delta) = clamp_transfer(delta, top, bottom, floor, epsilon) else {
            return false;
        };

        self.items[idx].height_percentage += delta;
        self.items[idx + 1].height_percentage -= delta;
        true
    }

    /// Sets the height of item `idx` to `percentage` and rescales the others proportionally.
    ///
    /// Each other item keeps at least `floor`. A lone item always takes the full height.
    pub(crate) fn set_item_height(
        &mut self,
        idx: usize,
        percentage: f64,
        floor: f64,
        epsilon: f64,
    ) -> bool {
        if idx >= self.items.len() {
            return false;
        }

        normalize::assign_share(&mut self.items, idx, percentage, floor, epsilon);
        true
    }
}
