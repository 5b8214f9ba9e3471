//! Pointer interaction with a design's schematic.
//!
//! The [`Controller`] turns a stream of pointer events into layout edits. It never changes a
//! design itself: every handler that completes a step returns the edit for the caller to apply,
//! and the caller passes the updated design back in with the next event. Events are handled one at a
//! time, so the edits of one gesture come out strictly in pointer-event order.
//!
//! Two kinds of gestures exist and only one can be active at a time:
//!
//! * Resizing: pressing on a divider between two columns or two items and dragging it. Every
//!   move that passes the floor check emits a pair resize and re-anchors the gesture, so deltas
//!   are incremental.
//! * Drag and drop: dragging a new item from the palette or an existing item, and dropping it
//!   into a column at the position the pointer indicates.
//!
//! Numeric edits don't go through the controller; they are applied as
//! [`Edit::UpdateItem`](crate::layout::Edit::UpdateItem) directly.

use wardrobe_config::Config;

mod dnd;
pub mod geometry;
mod resize;
pub mod types;


pub use self::geometry::{Hit, Point, Rect, Schematic};
pub use self::types::{DragSource, DropTarget, ResizeHandle, Session};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionOptions {
    /// Columns are never dragged narrower than this, in percent.
    pub column_width_floor: f64,
    /// Items are never dragged shorter than this, in percent.
    pub item_height_floor: f64,
    /// Resize steps at or below this many percent are held back until the pointer moves further.
    pub min_delta: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl InteractionOptions {
    pub fn from_config(config: &Config) -> Self {
        let interaction = &config.interaction;
        Self {
            column_width_floor: interaction.column_width_floor.get(),
            item_height_floor: interaction.item_height_floor.get(),
            min_delta: interaction.min_delta.get(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Controller {
    session: Session,
    options: InteractionOptions,
}

impl Controller {
    pub fn new(options: InteractionOptions) -> Self {
        Self {
            session: Session::Idle,
            options,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn options(&self) -> &InteractionOptions {
        &self.options
    }

    /// Abandons whatever gesture is in progress.
    pub fn cancel(&mut self) {
        if !self.session.is_idle() {
            tracing::debug!("cancelling {:?}", self.session);
        }
        self.session = Session::Idle;
    }
}
