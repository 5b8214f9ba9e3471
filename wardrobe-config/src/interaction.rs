use crate::FloatOrInt;

/// Thresholds applied by pointer sessions before an edit is dispatched.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    #[knuffel(child, unwrap(argument), default = Self::default().column_width_floor)]
    pub column_width_floor: FloatOrInt<0, 50>,
    #[knuffel(child, unwrap(argument), default = Self::default().item_height_floor)]
    pub item_height_floor: FloatOrInt<0, 50>,
    /// Percentage deltas with a magnitude at or below this are not dispatched.
    #[knuffel(child, unwrap(argument), default = Self::default().min_delta)]
    pub min_delta: FloatOrInt<0, 10>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            column_width_floor: FloatOrInt(10.),
            item_height_floor: FloatOrInt(5.),
            min_delta: FloatOrInt(0.1),
        }
    }
}
