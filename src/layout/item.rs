use serde::{Deserialize, Serialize};

use super::types::SectionType;

/// One functional component stacked inside a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "type")]
    pub kind: SectionType,
    /// Share of the column's usable height, in percent.
    pub height_percentage: f64,
    #[serde(default)]
    pub label: String,
}

impl Item {
    /// Creates an item labelled after its kind.
    pub fn new(kind: SectionType, height_percentage: f64) -> Self {
        Self {
            kind,
            height_percentage,
            label: kind.item_label(),
        }
    }

    /// Changes the kind and regenerates the label. Sizing is untouched.
    pub fn set_kind(&mut self, kind: SectionType) {
        self.kind = kind;
        self.label = kind.item_label();
    }
}
