use crate::FloatOrInt;

/// Floors and bounds used by the layout engine.
///
/// All values are percentages of the relevant axis, except `epsilon` which is the absolute
/// threshold below which a change or a denominator counts as degenerate.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    #[knuffel(child, unwrap(argument), default = Self::default().column_width_floor)]
    pub column_width_floor: FloatOrInt<0, 50>,
    #[knuffel(child, unwrap(argument), default = Self::default().item_height_floor)]
    pub item_height_floor: FloatOrInt<0, 50>,
    #[knuffel(child, unwrap(argument), default = Self::default().update_column_floor)]
    pub update_column_floor: FloatOrInt<0, 50>,
    #[knuffel(child, unwrap(argument), default = Self::default().update_item_floor)]
    pub update_item_floor: FloatOrInt<0, 50>,
    #[knuffel(child, unwrap(argument), default = Self::default().top_shelf_max)]
    pub top_shelf_max: FloatOrInt<0, 100>,
    #[knuffel(child, unwrap(argument), default = Self::default().epsilon)]
    pub epsilon: FloatOrInt<0, 1>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            column_width_floor: FloatOrInt(8.),
            item_height_floor: FloatOrInt(5.),
            update_column_floor: FloatOrInt(5.),
            update_item_floor: FloatOrInt(2.),
            top_shelf_max: FloatOrInt(60.),
            epsilon: FloatOrInt(0.01),
        }
    }
}

/// Height share given to a freshly inserted item, per item kind.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct ItemDefaults {
    #[knuffel(child, unwrap(argument), default = Self::default().shelf)]
    pub shelf: FloatOrInt<1, 100>,
    #[knuffel(child, unwrap(argument), default = Self::default().drawer)]
    pub drawer: FloatOrInt<1, 100>,
    #[knuffel(child, unwrap(argument), default = Self::default().hanging_rod)]
    pub hanging_rod: FloatOrInt<1, 100>,
    #[knuffel(child, unwrap(argument), default = Self::default().long_shelf)]
    pub long_shelf: FloatOrInt<1, 100>,
    #[knuffel(child, unwrap(argument), default = Self::default().shoe_rack)]
    pub shoe_rack: FloatOrInt<1, 100>,
    #[knuffel(child, unwrap(argument), default = Self::default().empty)]
    pub empty: FloatOrInt<1, 100>,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            shelf: FloatOrInt(10.),
            drawer: FloatOrInt(15.),
            hanging_rod: FloatOrInt(40.),
            long_shelf: FloatOrInt(10.),
            shoe_rack: FloatOrInt(15.),
            empty: FloatOrInt(10.),
        }
    }
}
