use chrono::NaiveDate;

use crate::ui_egui::drag::DragContext;
use crate::ui_egui::resize::ResizeContext;

pub mod day_header;
pub mod item_block;
pub mod palette;
pub mod time_grid;
pub mod utils;

/// Width of the hour label gutter left of the day columns
pub const TIME_LABEL_WIDTH: f32 = 56.0;
pub const COLUMN_SPACING: f32 = 1.0;
const MIN_COLUMN_WIDTH: f32 = 60.0;

/// Width of each day column for the space available
pub fn column_width(available_width: f32, days: usize) -> f32 {
    ((available_width - TIME_LABEL_WIDTH) / days.max(1) as f32).max(MIN_COLUMN_WIDTH)
}

/// A drag-move released over a new slot
#[derive(Clone, Debug, PartialEq)]
pub struct ItemMove {
    pub item_id: String,
    pub date: NaiveDate,
    pub start_hour: f64,
}

/// A resize released with a new start or duration
#[derive(Clone, Debug, PartialEq)]
pub struct ItemResize {
    pub item_id: String,
    pub start_hour: f64,
    pub duration: f64,
}

/// What happened in the time grid this frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridInteractionResult {
    /// Item that was clicked for selection
    pub clicked_item: Option<String>,
    /// Empty grid space was clicked
    pub background_clicked: bool,
    pub moved: Vec<ItemMove>,
    pub resized: Vec<ItemResize>,
    /// Request to create an item at (date, start hour)
    pub create_at: Option<(NaiveDate, f64)>,
}

impl GridInteractionResult {
    pub fn merge(&mut self, other: GridInteractionResult) {
        if other.clicked_item.is_some() {
            self.clicked_item = other.clicked_item;
        }
        self.background_clicked |= other.background_clicked;
        self.moved.extend(other.moved);
        self.resized.extend(other.resized);
        if other.create_at.is_some() {
            self.create_at = other.create_at;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// In-flight pointer gestures. At most one is active at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    pub drag: Option<DragContext>,
    pub resize: Option<ResizeContext>,
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        self.drag.is_some() || self.resize.is_some()
    }

    /// Id of the item being dragged or resized
    pub fn active_item(&self) -> Option<&str> {
        self.drag
            .as_ref()
            .map(|drag| drag.item_id.as_str())
            .or_else(|| self.resize.as_ref().map(|resize| resize.item_id.as_str()))
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.active_item() {
            log::debug!("Cancelled gesture on item {}", id);
        }
        self.drag = None;
        self.resize = None;
    }
}
