//! Percentage bookkeeping shared by every operation that touches a sibling list.
//!
//! Columns share the design width and items share their column's height. Both lists must sum
//! to 100 after any edit, so all rescaling goes through the two functions here.

use tracing::debug;

use super::column::Column;
use super::item::Item;

/// Total every share list is normalized to.
pub const FULL: f64 = 100.;

/// Something holding a percentage share of a sibling list.
pub(crate) trait Share {
    fn share(&self) -> f64;
    fn share_mut(&mut self) -> &mut f64;
}

impl Share for Column {
    fn share(&self) -> f64 {
        self.width_percentage
    }

    fn share_mut(&mut self) -> &mut f64 {
        &mut self.width_percentage
    }
}

impl Share for Item {
    fn share(&self) -> f64 {
        self.height_percentage
    }

    fn share_mut(&mut self) -> &mut f64 {
        &mut self.height_percentage
    }
}

/// What to do when the list total is too small to divide by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Degenerate {
    /// Give every entry the same share.
    EvenSplit,
    /// Leave the list as is.
    Skip,
}

pub(crate) fn total<T: Share>(list: &[T]) -> f64 {
    list.iter().map(Share::share).sum()
}

/// Whether `total` is 100 within `epsilon`.
pub(crate) fn is_full(total: f64, epsilon: f64) -> bool {
    (total - FULL).abs() <= epsilon
}

/// Rescales `list` so that its shares sum to 100 while keeping their proportions.
///
/// The total must exceed `min_total` to be used as a denominator; otherwise `fallback`
/// decides. Empty lists are left alone.
pub(crate) fn renormalize<T: Share>(list: &mut [T], min_total: f64, fallback: Degenerate) {
    if list.is_empty() {
        return;
    }

    let sum = total(list);
    if sum.is_finite() && sum > min_total {
        for entry in list.iter_mut() {
            let share = entry.share_mut();
            *share = *share / sum * FULL;
        }
        return;
    }

    match fallback {
        Degenerate::EvenSplit => even_split(list),
        Degenerate::Skip => (),
    }
}

/// Gives every entry of `list` the same share.
pub(crate) fn even_split<T: Share>(list: &mut [T]) {
    if list.is_empty() {
        return;
    }

    let share = FULL / list.len() as f64;
    for entry in list.iter_mut() {
        *entry.share_mut() = share;
    }
}

/// Sets the share of `list[idx]` to `requested` and rescales the others to fill the rest.
///
/// Every other entry keeps at least `floor`, so the target is clamped to
/// `[floor, 100 - floor * others]`. A lone entry always takes the whole 100. When the others
/// sum to (almost) nothing they split the remainder evenly.
pub(crate) fn assign_share<T: Share>(
    list: &mut [T],
    idx: usize,
    requested: f64,
    floor: f64,
    epsilon: f64,
) {
    if idx >= list.len() {
        return;
    }

    let others = list.len() - 1;
    if others == 0 {
        *list[idx].share_mut() = FULL;
        return;
    }

    let target = requested
        .min(FULL - floor * others as f64)
        .max(floor);
    let remaining = FULL - target;

    let others_total = total(list) - list[idx].share();
    if others_total.is_finite() && others_total > epsilon {
        let scale = remaining / others_total;
        for (i, entry) in list.iter_mut().enumerate() {
            if i != idx {
                *entry.share_mut() *= scale;
            }
        }
    } else {
        let share = remaining / others as f64;
        for (i, entry) in list.iter_mut().enumerate() {
            if i != idx {
                *entry.share_mut() = share;
            }
        }
    }

    *list[idx].share_mut() = target;
}

/// Clamps a transfer between two adjacent shares so both stay at or above `floor`.
///
/// Returns `None` when the clamped transfer is below `epsilon` in magnitude.
pub(crate) fn clamp_transfer(
    delta: f64,
    first: f64,
    second: f64,
    floor: f64,
    epsilon: f64,
) -> Option<f64> {
    if !delta.is_finite() {
        return None;
    }

    let max_pos = second - floor;
    let max_neg = -(first - floor);
    if max_neg > max_pos {
        debug!("pair of {first} and {second} is too small to keep both above {floor}");
        return None;
    }

    let clamped = delta.min(max_pos).max(max_neg);

    if !clamped.is_finite() || clamped.abs() < epsilon {
        debug!("ignoring degenerate transfer of {delta} (clamped to {clamped})");
        return None;
    }

    Some(clamped)
}
