use crate::layout::SectionType;

/// State of the pointer interaction with one schematic.
///
/// Only one session can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Session {
    #[default]
    Idle,
    /// Dragging the divider to the right of `column`.
    ResizingColumns { column: usize, anchor: f64 },
    /// Dragging the divider below `item` in `column`.
    ResizingItems {
        column: usize,
        item: usize,
        anchor: f64,
    },
    Dragging {
        source: DragSource,
        /// Where the item would land if dropped now.
        hover: Option<DropTarget>,
    },
}

impl Session {
    pub fn is_idle(&self) -> bool {
        matches!(self, Session::Idle)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(
            self,
            Session::ResizingColumns { .. } | Session::ResizingItems { .. }
        )
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Session::Dragging { .. })
    }
}

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A new item of this kind from the palette.
    Palette(SectionType),
    /// An existing item.
    Item { column: usize, item: usize },
}

/// Insertion point in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub column: usize,
    pub index: usize,
}

/// Divider that can be dragged to resize a pair of neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Between `column` and `column + 1`.
    Column(usize),
    /// Between `item` and `item + 1` in `column`.
    Item { column: usize, item: usize },
}
