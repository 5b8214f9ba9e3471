//! Checks of the layout invariants, used by `wardrobe check` and by the tests.

use std::fmt;

use super::normalize::is_full;
use super::{Layout, Options};

/// Where in a layout a value lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    TopShelf,
    Column(usize),
    Item(usize, usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::TopShelf => f.write_str("top shelf"),
            Location::Column(col) => write!(f, "column {col}"),
            Location::Item(col, item) => write!(f, "item {col}:{item}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A share is zero, negative, NaN or infinite.
    InvalidValue { at: Location, value: f64 },
    /// Column widths don't sum to 100.
    WidthSum { total: f64 },
    /// Item heights of a non-empty column don't sum to 100.
    HeightSum { column: usize, total: f64 },
    TopShelfOutOfRange { percentage: f64, max: f64 },
    /// A column or item is smaller than the smallest size an edit would produce.
    ///
    /// Insertions and moves rescale proportionally and can legitimately end up here, so this is
    /// only a warning.
    BelowFloor { at: Location, value: f64, floor: f64 },
}

impl Violation {
    pub fn is_error(&self) -> bool {
        !matches!(self, Violation::BelowFloor { .. })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidValue { at, value } => write!(f, "{at} has invalid size {value}"),
            Violation::WidthSum { total } => {
                write!(f, "column widths sum to {total:.3}% instead of 100%")
            }
            Violation::HeightSum { column, total } => {
                write!(f, "item heights in column {column} sum to {total:.3}% instead of 100%")
            }
            Violation::TopShelfOutOfRange { percentage, max } => {
                write!(f, "top shelf is {percentage:.3}%, outside [0, {max}]")
            }
            Violation::BelowFloor { at, value, floor } => {
                write!(f, "{at} is {value:.3}%, below the {floor}% floor")
            }
        }
    }
}

impl Layout {
    /// Returns every invariant the layout currently breaks.
    pub fn check_invariants(&self, options: &Options) -> Vec<Violation> {
        let mut violations = vec![];
        let eps = options.epsilon;

        if let Some(percentage) = self.top_shelf_height_percentage {
            if !percentage.is_finite() {
                violations.push(Violation::InvalidValue {
                    at: Location::TopShelf,
                    value: percentage,
                });
            } else if !(0. ..=options.top_shelf_max).contains(&percentage) {
                violations.push(Violation::TopShelfOutOfRange {
                    percentage,
                    max: options.top_shelf_max,
                });
            }
        }

        let col_count = self.columns.len();
        for (col_idx, column) in self.columns.iter().enumerate() {
            check_value(
                &mut violations,
                Location::Column(col_idx),
                column.width_percentage,
                (col_count > 1).then_some(options.update_column_floor),
            );

            let item_count = column.len();
            for (item_idx, item) in column.items.iter().enumerate() {
                check_value(
                    &mut violations,
                    Location::Item(col_idx, item_idx),
                    item.height_percentage,
                    (item_count > 1).then_some(options.update_item_floor),
                );
            }

            if item_count > 0 {
                let total = column.height_total();
                if !is_full(total, eps) {
                    violations.push(Violation::HeightSum {
                        column: col_idx,
                        total,
                    });
                }
            }
        }

        if col_count > 0 {
            let total = self.width_total();
            if !is_full(total, eps) {
                violations.push(Violation::WidthSum { total });
            }
        }

        violations
    }
}

fn check_value(violations: &mut Vec<Violation>, at: Location, value: f64, floor: Option<f64>) {
    if !value.is_finite() || value <= 0. {
        violations.push(Violation::InvalidValue { at, value });
        return;
    }

    if let Some(floor) = floor {
        // Allow for rounding noise from repeated rescaling.
        if value < floor - 1e-9 {
            violations.push(Violation::BelowFloor { at, value, floor });
        }
    }
}
