//! Designs and the pure edit entry points.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::edit::Edit;
use super::normalize::{self, Degenerate};
use super::types::Dimensions;
use super::{Layout, Options};

/// One complete interior proposal for a wardrobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub layout: Layout,
}

impl Design {
    pub fn new(id: impl Into<String>, name: impl Into<String>, layout: Layout) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            features: vec![],
            layout,
        }
    }

    /// Returns a new design with `edit` applied.
    ///
    /// When the edit is a no-op the result is equal to `self`. `dims` is only used by numeric
    /// updates, which need it to turn real-unit sizes into percentages.
    pub fn apply(&self, edit: &Edit, options: &Options, dims: &Dimensions) -> Design {
        let mut design = self.clone();
        let changed = match edit {
            Edit::InsertItem {
                column,
                kind,
                index,
            } => design.layout.insert_item(*column, *kind, *index, options),
            Edit::DeleteItem { target, item } => design.layout.delete_item(*target, *item, options),
            Edit::MoveItem {
                from_column,
                from_item,
                to_column,
                to_item,
            } => design
                .layout
                .move_item(*from_column, *from_item, *to_column, *to_item, options),
            Edit::ResizeColumnPair { column, delta } => {
                design.layout.resize_column_pair(*column, *delta, options)
            }
            Edit::ResizeItemPair {
                column,
                item,
                delta,
            } => design
                .layout
                .resize_item_pair(*column, *item, *delta, options),
            Edit::EqualizeColumns => design.layout.equalize_columns(),
            Edit::UpdateItem {
                target,
                item,
                update,
            } => design
                .layout
                .update_item(*target, *item, update, dims, options),
            Edit::UpdateFeatures(features) => {
                design.features.clone_from(features);
                true
            }
        };

        if changed {
            trace!("applied {} to {}", edit.name(), self.id);
        }
        design
    }

    /// Repairs a design that came from outside the editor so that it satisfies the layout
    /// invariants.
    ///
    /// Zero, negative and non-finite shares are lifted to the update floor, then lists that
    /// don't sum to 100 are rescaled. Returns whether anything had to be changed.
    pub fn sanitize(&mut self, options: &Options) -> bool {
        let before = self.clone();
        let layout = &mut self.layout;

        layout.top_shelf_height_percentage = layout
            .top_shelf_height_percentage
            .filter(|p| p.is_finite())
            .map(|p| p.min(options.top_shelf_max).max(0.));

        let column_floor = options.update_column_floor.max(options.epsilon);
        let item_floor = options.update_item_floor.max(options.epsilon);

        for column in &mut layout.columns {
            column.width_percentage = positive_or(column.width_percentage, column_floor);

            for item in &mut column.items {
                item.height_percentage = positive_or(item.height_percentage, item_floor);
                if item.label.trim().is_empty() {
                    item.label = item.kind.name().to_owned();
                }
            }
            if !normalize::is_full(column.height_total(), options.epsilon) {
                normalize::renormalize(&mut column.items, options.epsilon, Degenerate::EvenSplit);
            }
        }
        if !normalize::is_full(layout.width_total(), options.epsilon) {
            normalize::renormalize(&mut layout.columns, options.epsilon, Degenerate::EvenSplit);
        }

        // NaN never compares equal, so a design that had one always counts as repaired.
        let repaired = *self != before;
        if repaired {
            warn!("repaired invalid layout in design {:?}", self.id);
        }
        repaired
    }

    /// Multi-line human-readable description of the design.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", self.name, self.id);
        if !self.description.is_empty() {
            let _ = writeln!(out, "  {}", self.description);
        }
        if !self.features.is_empty() {
            let _ = writeln!(out, "  features: {}", self.features.join(", "));
        }

        if self.layout.has_top_shelf() {
            let _ = writeln!(
                out,
                "  top shelf: {:.1}%",
                self.layout.top_shelf_percentage()
            );
        }

        for (idx, column) in self.layout.columns.iter().enumerate() {
            let _ = write!(out, "  column {idx} ({:.1}%):", column.width_percentage);
            if column.is_empty() {
                let _ = write!(out, " empty");
            }
            for (item_idx, item) in column.items.iter().enumerate() {
                let sep = if item_idx == 0 { " " } else { ", " };
                let _ = write!(out, "{sep}{} {:.1}%", item.kind, item.height_percentage);
            }
            out.push('\n');
        }

        out
    }
}

/// Keeps a valid share and lifts a zero, negative or non-finite one to `floor`.
fn positive_or(value: f64, floor: f64) -> f64 {
    if value.is_finite() && value > 0. {
        value
    } else {
        floor
    }
}

/// Sanitizes every design and makes the ids unique and non-empty.
///
/// Offending ids are replaced by `design-<n>` with `n` the 1-based position in the list.
pub fn sanitize_designs(designs: &mut [Design], options: &Options) {
    let mut seen = HashSet::new();
    for (idx, design) in designs.iter_mut().enumerate() {
        design.sanitize(options);

        if design.id.trim().is_empty() || !seen.insert(design.id.clone()) {
            let mut n = idx + 1;
            let mut id = format!("design-{n}");
            while seen.contains(&id) {
                n += 1;
                id = format!("design-{n}");
            }
            warn!("replacing design id {:?} with {id:?}", design.id);
            design.id = id.clone();
            seen.insert(id);
        }
    }
}

/// Applies `edit` to the design with `id` and returns the full updated collection.
///
/// Designs with other ids are passed through unchanged. An unknown id returns the collection
/// as is.
pub fn apply_edit(
    designs: &[Design],
    id: &str,
    edit: &Edit,
    options: &Options,
    dims: &Dimensions,
) -> Vec<Design> {
    designs
        .iter()
        .map(|design| {
            if design.id == id {
                design.apply(edit, options, dims)
            } else {
                design.clone()
            }
        })
        .collect()
}
