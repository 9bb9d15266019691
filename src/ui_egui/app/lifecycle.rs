use super::CadenceApp;
use crate::models::settings::Settings;
use crate::services::grid_snap::GridSnapCalculator;
use crate::services::sample::sample_week;
use crate::services::settings::SettingsService;
use crate::ui_egui::scroll::ScrollState;
use crate::ui_egui::views::GestureState;
use chrono::Local;

impl CadenceApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_user_config();
        if settings_service.is_none() {
            log::warn!("No config directory available; settings will not be saved");
        }

        let settings = settings_service
            .as_ref()
            .map(load_settings_or_default)
            .unwrap_or_default();
        log::info!(
            "Loaded settings: view={:?}, column_width={:?}, snap={}h",
            settings.view,
            settings.column_width,
            settings.grid.snap_increment_hours
        );

        Self::with_settings(settings, settings_service)
    }

    /// Build the app around already-loaded settings
    pub fn with_settings(settings: Settings, settings_service: Option<SettingsService>) -> Self {
        let today = Local::now().date_naive();
        let items = sample_week(today);
        let next_item_id = items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let scroll = ScrollState::initial(&GridSnapCalculator::new(settings.grid));

        Self {
            settings,
            settings_service,
            items,
            current_date: today,
            gestures: GestureState::default(),
            selected_item: None,
            scroll,
            next_item_id,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        self.render_toolbar(ctx);
        self.render_calendar_panel(ctx);
        self.render_details_panel(ctx);

        let result = self.render_main_panel(ctx);
        if !result.is_empty() {
            self.apply_interactions(result);
        }
    }

    pub(super) fn save_settings(&self) {
        let Some(service) = &self.settings_service else {
            return;
        };
        if let Err(e) = service.save(&self.settings) {
            log::error!("Failed to save settings: {:#}", e);
        }
    }
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}
