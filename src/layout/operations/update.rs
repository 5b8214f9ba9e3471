use tracing::{debug, trace};

use crate::layout::normalize::{self, FULL};
use crate::layout::types::{Dimensions, ItemUpdate, Target};
use crate::layout::{Layout, Options};

impl Layout {
    /// Applies a numeric edit to an item, its column, or the top shelf.
    ///
    /// Sizes in `update` are real-unit lengths for a design of `dims`. The fields are applied
    /// in a fixed order: type, then height, then width. For the top shelf only the height is
    /// used.
    ///
    /// A height is converted against the height left below the top shelf as it was before this
    /// update. Every other item keeps at least the update item floor and is rescaled
    /// proportionally; a lone item always fills its column. Widths work the same way across
    /// columns with the update column floor.
    pub fn update_item(
        &mut self,
        target: Target,
        item_idx: usize,
        update: &ItemUpdate,
        dims: &Dimensions,
        options: &Options,
    ) -> bool {
        let column_idx = match target {
            Target::TopShelf => {
                return match update.height {
                    Some(height) => self.set_top_shelf_height(height, dims, options),
                    None => {
                        debug!("top shelf update without a height");
                        false
                    }
                };
            }
            Target::Column(idx) => idx,
        };

        if column_idx >= self.columns.len() {
            debug!("cannot update item in missing column {column_idx}");
            return false;
        }

        let available_height = self.available_height(dims);
        let mut changed = false;

        if update.kind.is_some() || update.height.is_some() {
            let column = &mut self.columns[column_idx];
            if item_idx < column.len() {
                if let Some(kind) = update.kind {
                    column.items[item_idx].set_kind(kind);
                    changed = true;
                }

                if let Some(height) = update.height {
                    match share_of(height, available_height, options.epsilon) {
                        Some(percentage) => {
                            changed |= column.set_item_height(
                                item_idx,
                                percentage,
                                options.update_item_floor,
                                options.epsilon,
                            );
                        }
                        None => debug!("ignoring height {height} with {available_height} available"),
                    }
                }
            } else {
                debug!("no item {item_idx} in column {column_idx}");
            }
        }

        if let Some(width) = update.width {
            match share_of(width, dims.width, options.epsilon) {
                Some(percentage) => {
                    normalize::assign_share(
                        &mut self.columns,
                        column_idx,
                        percentage,
                        options.update_column_floor,
                        options.epsilon,
                    );
                    changed = true;
                }
                None => debug!("ignoring width {width} of {}", dims.width),
            }
        }

        if changed {
            trace!("updated item {column_idx}:{item_idx} with {update:?}");
        }
        changed
    }

    /// Sets the top shelf band to a real-unit height, clamped to `[0, top_shelf_max]` percent.
    pub fn set_top_shelf_height(
        &mut self,
        height: f64,
        dims: &Dimensions,
        options: &Options,
    ) -> bool {
        let Some(percentage) = share_of(height, dims.height, options.epsilon) else {
            debug!("ignoring top shelf height {height} of {}", dims.height);
            return false;
        };

        let percentage = percentage.min(options.top_shelf_max).max(0.);
        self.top_shelf_height_percentage = Some(percentage);
        trace!("set top shelf to {percentage}%");
        true
    }
}

/// Converts a real-unit `length` into a percentage of `total`.
fn share_of(length: f64, total: f64, epsilon: f64) -> Option<f64> {
    if !length.is_finite() || !total.is_finite() || total <= epsilon {
        return None;
    }

    Some(length / total * FULL)
}
