//! Resizing by dragging dividers.

use tracing::{info, trace};

use super::geometry::{Point, Schematic};
use super::types::{ResizeHandle, Session};
use super::Controller;
use crate::layout::Edit;

impl Controller {
    /// Starts resizing at `handle`, anchored at `pos`.
    ///
    /// Returns `false` when another gesture is already in progress.
    pub fn resize_begin(&mut self, handle: ResizeHandle, pos: Point) -> bool {
        if !self.session.is_idle() {
            return false;
        }

        self.session = match handle {
            ResizeHandle::Column(column) => Session::ResizingColumns {
                column,
                anchor: pos.x,
            },
            ResizeHandle::Item { column, item } => Session::ResizingItems {
                column,
                item,
                anchor: pos.y,
            },
        };

        info!("started resizing {handle:?}");
        true
    }

    /// Handles a pointer press: starts resizing if `pos` is on a divider.
    pub fn pointer_down(&mut self, schematic: &Schematic, pos: Point) -> bool {
        match schematic.handle_at(pos) {
            Some(handle) => self.resize_begin(handle, pos),
            None => false,
        }
    }

    /// Handles pointer movement during a resize.
    ///
    /// Returns the pair resize to apply, if the movement since the anchor is large enough and
    /// doesn't push either neighbor under the floor. The anchor moves to `pos` only when an
    /// edit is returned.
    pub fn resize_update(&mut self, schematic: &Schematic, pos: Point) -> Option<Edit> {
        let options = self.options;
        let layout = schematic.layout;

        match &mut self.session {
            Session::ResizingColumns { column, anchor } => {
                let column = *column;
                let delta = schematic.column_delta(pos.x - *anchor);

                let right = column.checked_add(1).and_then(|next| layout.column(next));
                if let (Some(left), Some(right)) = (layout.column(column), right) {
                    let floor = options.column_width_floor;
                    if (delta < 0. && left.width_percentage + delta < floor)
                        || (delta > 0. && right.width_percentage - delta < floor)
                    {
                        trace!("column resize by {delta}% would go below {floor}%");
                        return None;
                    }
                }

                if delta.abs() <= options.min_delta {
                    return None;
                }

                *anchor = pos.x;
                Some(Edit::ResizeColumnPair { column, delta })
            }
            Session::ResizingItems {
                column,
                item,
                anchor,
            } => {
                let (column, item) = (*column, *item);
                let delta = schematic.item_delta(pos.y - *anchor);

                let bottom = item.checked_add(1).and_then(|next| layout.item(column, next));
                if let (Some(top), Some(bottom)) = (layout.item(column, item), bottom) {
                    let floor = options.item_height_floor;
                    if (delta < 0. && top.height_percentage + delta < floor)
                        || (delta > 0. && bottom.height_percentage - delta < floor)
                    {
                        trace!("item resize by {delta}% would go below {floor}%");
                        return None;
                    }
                }

                if delta.abs() <= options.min_delta {
                    return None;
                }

                *anchor = pos.y;
                Some(Edit::ResizeItemPair {
                    column,
                    item,
                    delta,
                })
            }
            _ => None,
        }
    }

    /// Ends the resize on pointer release. Returns whether a resize was in progress.
    pub fn resize_end(&mut self) -> bool {
        if !self.session.is_resizing() {
            return false;
        }

        info!("finished resizing");
        self.session = Session::Idle;
        true
    }
}
