//! Coordinate system of the wardrobe schematic.
//!
//! The schematic is drawn in virtual units: it is always [`VIRTUAL_HEIGHT`] tall and as wide as
//! the wardrobe's aspect ratio makes it. An outer frame of [`FRAME_THICKNESS`] surrounds the
//! columns horizontally. When the design has a top shelf, its band sits at the top and the
//! columns start one [`SHELF_THICKNESS`] below it.

use crate::layout::{Dimensions, Layout, FULL};

use super::types::ResizeHandle;

pub const VIRTUAL_HEIGHT: f64 = 1000.;
pub const FRAME_THICKNESS: f64 = 15.;
pub const SHELF_THICKNESS: f64 = 10.;

/// How far from a divider a pointer still grabs it.
pub const HANDLE_REACH: f64 = 30.;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Whether `point` is inside, including the top and left edges but not the others.
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x && point.x < self.right() && self.y <= point.y && point.y < self.bottom()
    }
}

/// What is under a point of the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Handle(ResizeHandle),
    Item { column: usize, item: usize },
    TopShelf,
    /// Part of a column not covered by any item.
    Column(usize),
}

/// A layout placed on the schematic canvas of a wardrobe.
#[derive(Debug, Clone, Copy)]
pub struct Schematic<'a> {
    pub dims: &'a Dimensions,
    pub layout: &'a Layout,
}

impl<'a> Schematic<'a> {
    pub fn new(dims: &'a Dimensions, layout: &'a Layout) -> Self {
        Self { dims, layout }
    }

    pub fn width(&self) -> f64 {
        if self.dims.height > 0. && self.dims.width.is_finite() {
            VIRTUAL_HEIGHT * self.dims.width / self.dims.height
        } else {
            VIRTUAL_HEIGHT
        }
    }

    /// Width the columns share between the two frame sides.
    pub fn usable_width(&self) -> f64 {
        self.width() - 2. * FRAME_THICKNESS
    }

    pub fn top_shelf_height(&self) -> f64 {
        self.layout.top_shelf_percentage() / FULL * VIRTUAL_HEIGHT
    }

    pub fn columns_start_y(&self) -> f64 {
        let top = self.top_shelf_height();
        if top > 0. {
            top + SHELF_THICKNESS
        } else {
            0.
        }
    }

    pub fn columns_available_height(&self) -> f64 {
        VIRTUAL_HEIGHT - self.columns_start_y()
    }

    pub fn top_shelf_rect(&self) -> Option<Rect> {
        let height = self.top_shelf_height();
        (height > 0.).then(|| {
            Rect::new(
                FRAME_THICKNESS,
                FRAME_THICKNESS,
                self.usable_width(),
                height,
            )
        })
    }

    /// Rectangles of all columns from left to right.
    pub fn columns(&self) -> impl Iterator<Item = Rect> + '_ {
        let y = self.columns_start_y();
        let h = self.columns_available_height();
        let usable = self.usable_width();

        let mut x = FRAME_THICKNESS;
        self.layout.columns.iter().map(move |column| {
            let w = column.width_percentage / FULL * usable;
            let rect = Rect::new(x, y, w, h);
            x += w;
            rect
        })
    }

    pub fn column_rect(&self, column: usize) -> Option<Rect> {
        self.columns().nth(column)
    }

    /// Rectangles of the items in `column` from top to bottom.
    pub fn items(&self, column: usize) -> impl Iterator<Item = Rect> + '_ {
        let col_rect = self.column_rect(column).unwrap_or_default();
        let available = self.columns_available_height();
        let items = self
            .layout
            .column(column)
            .map(|col| &col.items[..])
            .unwrap_or_default();

        let mut y = col_rect.y;
        items.iter().map(move |item| {
            let h = item.height_percentage / FULL * available;
            let rect = Rect::new(col_rect.x, y, col_rect.w, h);
            y += h;
            rect
        })
    }

    pub fn item_rect(&self, column: usize, item: usize) -> Option<Rect> {
        self.items(column).nth(item)
    }

    /// Index at which a dragged item would be inserted into `column` when dropped at height
    /// `y`.
    ///
    /// This is the first item whose vertical midpoint is below `y`, or the end of the column.
    pub fn insert_index(&self, column: usize, y: f64) -> usize {
        let Some(col) = self.layout.column(column) else {
            return 0;
        };

        self.items(column)
            .position(|rect| y < rect.y + rect.h / 2.)
            .unwrap_or(col.len())
    }

    /// Height of the insertion indicator for `index` in `column`.
    pub fn drop_line_y(&self, column: usize, index: usize) -> f64 {
        let before = self
            .layout
            .column(column)
            .map_or(0., |col| col.height_before(index));
        self.columns_start_y() + before / FULL * self.columns_available_height()
    }

    /// Column whose area contains `point`.
    pub fn column_at(&self, point: Point) -> Option<usize> {
        self.columns().position(|rect| rect.contains(point))
    }

    /// Resize handle within reach of `point`.
    ///
    /// Column dividers take precedence over item dividers. The right edge of the last column
    /// and the bottom edge of the last item in a column are not handles.
    pub fn handle_at(&self, point: Point) -> Option<ResizeHandle> {
        let count = self.layout.columns.len();
        for (idx, rect) in self.columns().enumerate() {
            if idx + 1 >= count {
                break;
            }

            let handle = Rect::new(rect.right() - HANDLE_REACH, rect.y, 2. * HANDLE_REACH, rect.h);
            if handle.contains(point) {
                return Some(ResizeHandle::Column(idx));
            }
        }

        let column = self.column_at(point)?;
        let item_count = self.layout.column(column)?.len();
        self.items(column)
            .take(item_count.saturating_sub(1))
            .position(|rect| {
                let handle = Rect::new(rect.x, rect.bottom() - HANDLE_REACH, rect.w, 2. * HANDLE_REACH);
                handle.contains(point)
            })
            .map(|item| ResizeHandle::Item { column, item })
    }

    /// Topmost thing under `point`.
    pub fn hit(&self, point: Point) -> Option<Hit> {
        if let Some(handle) = self.handle_at(point) {
            return Some(Hit::Handle(handle));
        }

        if let Some(column) = self.column_at(point) {
            let item = self.items(column).position(|rect| rect.contains(point));
            return Some(match item {
                Some(item) => Hit::Item { column, item },
                None => Hit::Column(column),
            });
        }

        match self.top_shelf_rect() {
            Some(rect) if rect.contains(point) => Some(Hit::TopShelf),
            _ => None,
        }
    }

    /// Horizontal pointer movement as a share of the usable width, in percent.
    pub fn column_delta(&self, dx: f64) -> f64 {
        let usable = self.usable_width();
        if usable > 0. {
            dx / usable * FULL
        } else {
            0.
        }
    }

    /// Vertical pointer movement as a share of the columns' height, in percent.
    pub fn item_delta(&self, dy: f64) -> f64 {
        let available = self.columns_available_height();
        if available > 0. {
            dy / available * FULL
        } else {
            0.
        }
    }

    /// Converts a virtual width to the wardrobe's unit, rounded for display.
    pub fn real_width(&self, width: f64) -> f64 {
        self.dims.round(width * self.dims.width / self.width())
    }

    /// Converts a virtual height to the wardrobe's unit, rounded for display.
    pub fn real_height(&self, height: f64) -> f64 {
        self.dims.round(height * self.dims.height / VIRTUAL_HEIGHT)
    }

    /// Real-unit width and height of an item, as offered for numeric editing.
    pub fn item_real_size(&self, column: usize, item: usize) -> Option<(f64, f64)> {
        let rect = self.item_rect(column, item)?;
        Some((self.real_width(rect.w), self.real_height(rect.h)))
    }

    pub fn top_shelf_real_height(&self) -> f64 {
        self.real_height(self.top_shelf_height())
    }
}
