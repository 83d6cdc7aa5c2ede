use serde::{Deserialize, Serialize};

use crate::items::ChatItem;

/// One row of decorator output: the item plus its layout instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoratedItem {
    pub item: ChatItem,
    /// Vertical space below this row.
    pub bottom_margin: f32,
    pub show_avatar: bool,
    pub is_selected: bool,
    pub show_selection_indicator: bool,
}

impl DecoratedItem {
    /// Wraps a row the decorator inserted. Decorations never take margin,
    /// avatar or selection attributes.
    pub fn decoration(item: ChatItem) -> Self {
        Self {
            item,
            bottom_margin: 0.0,
            show_avatar: false,
            is_selected: false,
            show_selection_indicator: false,
        }
    }

    pub fn uid(&self) -> &str {
        self.item.uid()
    }
}
