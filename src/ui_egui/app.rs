mod interactions;
mod lifecycle;
mod navigation;
mod sidebar;
mod toolbar;

use crate::models::item::TimeRangedItem;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::ui_egui::scroll::ScrollState;
use crate::ui_egui::views::GestureState;
use chrono::NaiveDate;

pub struct CadenceApp {
    /// Persisted view and grid preferences
    settings: Settings,
    /// Where settings are saved on exit; `None` when no config dir exists
    settings_service: Option<SettingsService>,
    /// In-memory items shown on the grid
    items: Vec<TimeRangedItem>,
    current_date: NaiveDate,
    /// Active drag or resize, owned here and lent to the grid each frame
    gestures: GestureState,
    selected_item: Option<String>,
    scroll: ScrollState,
    next_item_id: u64,
}

impl eframe::App for CadenceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_settings();
    }
}
