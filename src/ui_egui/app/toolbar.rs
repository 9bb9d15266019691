use super::CadenceApp;
use crate::models::settings::{ColumnWidthMode, ViewMode};
use egui::{Context, RichText};

impl CadenceApp {
    pub(super) fn render_toolbar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Today").clicked() {
                    self.jump_to_today();
                }
                if ui.button("◀").on_hover_text("Previous").clicked() {
                    self.navigate_previous();
                }
                if ui.button("▶").on_hover_text("Next").clicked() {
                    self.navigate_next();
                }

                ui.label(RichText::new(self.current_date.format("%B %Y").to_string()).heading());

                ui.separator();

                ui.selectable_value(&mut self.settings.view, ViewMode::Day, "Day");
                ui.selectable_value(&mut self.settings.view, ViewMode::Week, "Week");

                ui.separator();

                if ui
                    .checkbox(&mut self.settings.show_completed, "Show completed")
                    .changed()
                {
                    log::info!("Show completed: {}", self.settings.show_completed);
                }

                ui.separator();

                ui.label("Widths:");
                ui.selectable_value(
                    &mut self.settings.column_width,
                    ColumnWidthMode::Local,
                    "Local",
                )
                .on_hover_text("Each item sizes to its direct overlaps");
                ui.selectable_value(
                    &mut self.settings.column_width,
                    ColumnWidthMode::Cluster,
                    "Cluster",
                )
                .on_hover_text("Every item in an overlap group shares one width");
            });
        });
    }
}
