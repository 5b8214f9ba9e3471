//! Drag and drop of palette entries and existing items.

use tracing::{debug, info};

use super::geometry::{Point, Schematic};
use super::types::{DragSource, DropTarget, Session};
use super::Controller;
use crate::layout::Edit;

impl Controller {
    /// Starts dragging `source`. Returns `false` when another gesture is in progress.
    pub fn drag_begin(&mut self, source: DragSource) -> bool {
        if !self.session.is_idle() {
            return false;
        }

        info!("started dragging {source:?}");
        self.session = Session::Dragging {
            source,
            hover: None,
        };
        true
    }

    /// Updates the drop position while dragging over the schematic.
    ///
    /// Returns the insertion point the pointer indicates, if it is over a column.
    pub fn drag_over(&mut self, schematic: &Schematic, pos: Point) -> Option<DropTarget> {
        let Session::Dragging { hover, .. } = &mut self.session else {
            return None;
        };

        *hover = drop_target(schematic, pos);
        *hover
    }

    /// The pointer left the schematic; the drag goes on but there is no drop position.
    pub fn drag_leave(&mut self) {
        if let Session::Dragging { hover, .. } = &mut self.session {
            *hover = None;
        }
    }

    /// Current insertion point and the height of its indicator line.
    pub fn drop_indicator(&self, schematic: &Schematic) -> Option<(DropTarget, f64)> {
        let Session::Dragging {
            hover: Some(target),
            ..
        } = self.session
        else {
            return None;
        };

        Some((target, schematic.drop_line_y(target.column, target.index)))
    }

    /// Drops at `pos` and returns the resulting edit.
    ///
    /// Always ends the drag. Dropping outside every column produces no edit.
    pub fn drop(&mut self, schematic: &Schematic, pos: Point) -> Option<Edit> {
        let Session::Dragging { source, .. } = self.session else {
            return None;
        };
        self.session = Session::Idle;

        let Some(DropTarget { column, index }) = drop_target(schematic, pos) else {
            debug!("dropped {source:?} outside of any column");
            return None;
        };

        info!("dropped {source:?} at {column}:{index}");
        let edit = match source {
            DragSource::Palette(kind) => Edit::InsertItem {
                column,
                kind,
                index: Some(index),
            },
            DragSource::Item {
                column: from_column,
                item: from_item,
            } => Edit::MoveItem {
                from_column,
                from_item,
                to_column: column,
                to_item: index,
            },
        };
        Some(edit)
    }

    /// Ends the drag without dropping, e.g. when it was cancelled.
    pub fn drag_end(&mut self) -> bool {
        if !self.session.is_dragging() {
            return false;
        }

        debug!("drag ended without a drop");
        self.session = Session::Idle;
        true
    }
}

fn drop_target(schematic: &Schematic, pos: Point) -> Option<DropTarget> {
    let column = schematic.column_at(pos)?;
    let index = schematic.insert_index(column, pos.y);
    Some(DropTarget { column, index })
}
