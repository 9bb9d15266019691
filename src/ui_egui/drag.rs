use chrono::NaiveDate;

use crate::models::item::TimeRangedItem;

/// An in-progress move of a single item.
///
/// Owned by the app and handed to the grid renderer each frame; the renderer
/// updates the hover target from the pointer and the app commits it on
/// release.
#[derive(Clone, Debug, PartialEq)]
pub struct DragContext {
    pub item_id: String,
    pub duration: f64,
    /// Distance from the item's top edge to where it was grabbed
    pub grab_offset_px: f64,
    pub original_date: NaiveDate,
    pub original_start: f64,
    pub hovered_date: NaiveDate,
    pub hovered_start: f64,
}

impl DragContext {
    /// Start a drag, or `None` when the item is fixed or all-day
    pub fn from_item(item: &TimeRangedItem, grab_offset_px: f64) -> Option<Self> {
        if !item.is_draggable() {
            return None;
        }
        Some(Self {
            item_id: item.id.clone(),
            duration: item.effective_duration(),
            grab_offset_px,
            original_date: item.date,
            original_start: item.effective_start(),
            hovered_date: item.date,
            hovered_start: item.effective_start(),
        })
    }

    pub fn update_hover(&mut self, date: NaiveDate, start_hour: f64) {
        self.hovered_date = date;
        self.hovered_start = start_hour;
    }

    /// True when releasing now would change the item
    pub fn has_moved(&self) -> bool {
        self.hovered_date != self.original_date || self.hovered_start != self.original_start
    }
}
