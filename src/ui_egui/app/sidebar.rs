//! Side panels: calendar visibility on the left, details for the selected
//! item on the right.

use std::collections::BTreeSet;

use super::interactions::mark_changed;
use super::CadenceApp;
use crate::models::block::Commitment;
use crate::models::item::TimeRangedItem;
use crate::services::block_style;
use crate::services::grid_snap::GridSnapCalculator;
use crate::services::layout::slot_of;
use crate::utils::time::{format_hour, format_range};
use egui::{Color32, RichText};

const PANEL_DEFAULT_WIDTH: f32 = 240.0;
const PANEL_MIN_WIDTH: f32 = 200.0;
const CALENDAR_PANEL_WIDTH: f32 = 160.0;

/// Change requested from the details panel
#[derive(Debug, Clone, PartialEq)]
enum DetailsEdit {
    Rename(String),
    Retime { start_hour: f64, duration: f64 },
    ToggleCompleted,
    Delete,
}

impl CadenceApp {
    pub(super) fn render_calendar_panel(&mut self, ctx: &egui::Context) {
        let calendars = known_calendars(&self.items, &self.settings.hidden_calendars);

        egui::SidePanel::left("calendars")
            .default_width(CALENDAR_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.label(RichText::new("My calendars").strong());
                ui.add_space(4.0);

                for calendar in &calendars {
                    let mut visible = self.settings.is_calendar_visible(calendar);
                    if ui.checkbox(&mut visible, calendar.as_str()).changed() {
                        self.settings.set_calendar_visible(calendar, visible);
                        log::info!("Calendar {} visible: {}", calendar, visible);
                    }
                }
            });
    }

    pub(super) fn render_details_panel(&mut self, ctx: &egui::Context) {
        let Some(selected) = self.selected_item.clone() else {
            return;
        };
        let Some(index) = self.items.iter().position(|item| item.id == selected) else {
            self.selected_item = None;
            return;
        };

        let slot = slot_of(
            &self.items,
            &selected,
            &self.settings.item_filter(),
            self.settings.column_width,
        );

        let mut close = false;
        let mut edits = Vec::new();

        egui::SidePanel::right("item_details")
            .default_width(PANEL_DEFAULT_WIDTH)
            .min_width(PANEL_MIN_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                let item = &self.items[index];
                let time_format = self.settings.time_format.as_str();

                ui.horizontal(|ui| {
                    let mut title = item.title.clone();
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut title)
                            .font(egui::TextStyle::Heading)
                            .desired_width(ui.available_width() - 24.0),
                    );
                    if response.changed() {
                        edits.push(DetailsEdit::Rename(title));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        close = ui.small_button("✕").clicked();
                    });
                });
                ui.add_space(4.0);

                ui.label(item.date.format("%A, %B %-d").to_string());
                if item.all_day {
                    ui.label("All day");
                } else {
                    ui.label(format_range(
                        item.effective_start(),
                        item.effective_duration(),
                        time_format,
                    ));
                }

                if item.is_draggable() {
                    let mut start_hour = item.effective_start();
                    let mut duration = item.effective_duration();
                    let mut changed = false;

                    ui.horizontal(|ui| {
                        ui.label("Starts");
                        changed |= ui
                            .add(
                                egui::DragValue::new(&mut start_hour)
                                    .speed(0.05)
                                    .custom_formatter(|hour, _| format_hour(hour, time_format)),
                            )
                            .changed();
                        ui.label("for");
                        changed |= ui
                            .add(
                                egui::DragValue::new(&mut duration)
                                    .speed(0.05)
                                    .suffix(" h"),
                            )
                            .changed();
                    });
                    if changed {
                        edits.push(DetailsEdit::Retime {
                            start_hour,
                            duration,
                        });
                    }
                }

                ui.add_space(8.0);
                ui.separator();

                egui::Grid::new("item_details_grid")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Kind").color(Color32::GRAY));
                        ui.label(format!("{:?}", item.kind));
                        ui.end_row();

                        ui.label(RichText::new("Calendar").color(Color32::GRAY));
                        ui.label(&item.calendar);
                        ui.end_row();

                        ui.label(RichText::new("State").color(Color32::GRAY));
                        ui.label(
                            block_style::matching_rule(&item.block)
                                .map(|rule| rule.name)
                                .unwrap_or("default"),
                        );
                        ui.end_row();

                        if let Some((column, total)) = slot {
                            ui.label(RichText::new("Column").color(Color32::GRAY));
                            ui.label(format!("{} of {}", column + 1, total));
                            ui.end_row();
                        }

                        ui.label(RichText::new("Movable").color(Color32::GRAY));
                        ui.label(if item.is_draggable() { "Yes" } else { "No" });
                        ui.end_row();
                    });

                let badges = block_style::badges(&item.block);
                if !badges.is_empty() {
                    ui.add_space(8.0);
                    ui.horizontal_wrapped(|ui| {
                        for badge in badges {
                            ui.label(
                                RichText::new(badge.label())
                                    .small()
                                    .background_color(ui.visuals().faint_bg_color),
                            );
                        }
                    });
                }

                ui.add_space(8.0);
                let mut completed = item.completed;
                if ui.checkbox(&mut completed, "Completed").changed() {
                    edits.push(DetailsEdit::ToggleCompleted);
                }

                ui.add_space(8.0);
                if ui
                    .button(RichText::new("Delete").color(ui.visuals().error_fg_color))
                    .clicked()
                {
                    edits.push(DetailsEdit::Delete);
                }
            });

        let calc = self.snap_calculator();
        for edit in edits {
            if edit == DetailsEdit::Delete && self.gestures.active_item() == Some(selected.as_str()) {
                self.gestures.cancel();
            }
            if !apply_details_edit(&mut self.items, &selected, edit, &calc) {
                log::warn!("Dropped edit for unknown item {}", selected);
            }
        }

        if close || !self.items.iter().any(|item| item.id == selected) {
            self.selected_item = None;
        }
    }
}

/// Calendars named by any item, plus hidden ones that no longer have items
fn known_calendars(items: &[TimeRangedItem], hidden: &BTreeSet<String>) -> Vec<String> {
    items
        .iter()
        .map(|item| item.calendar.clone())
        .chain(hidden.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn apply_details_edit(
    items: &mut Vec<TimeRangedItem>,
    id: &str,
    edit: DetailsEdit,
    calc: &GridSnapCalculator,
) -> bool {
    let Some(index) = items.iter().position(|item| item.id == id) else {
        return false;
    };

    match edit {
        DetailsEdit::Rename(title) => {
            items[index].title = title;
        }
        DetailsEdit::Retime {
            start_hour,
            duration,
        } => {
            let item = &mut items[index];
            if !item.is_draggable() {
                return true;
            }
            let (start_hour, duration) = calc.fit_range(start_hour, duration);
            if start_hour == item.start_hour && duration == item.duration {
                return true;
            }
            log::info!(
                "Retimed item {} to {:.2}h + {:.2}h",
                item.id,
                start_hour,
                duration
            );
            item.start_hour = start_hour;
            item.duration = duration;
            mark_changed(&mut item.block);
        }
        DetailsEdit::ToggleCompleted => {
            let item = &mut items[index];
            item.completed = !item.completed;
            item.block.commitment = if item.completed {
                Commitment::Completed
            } else {
                Commitment::Confirmed
            };
            log::info!("Item {} completed: {}", item.id, item.completed);
        }
        DetailsEdit::Delete => {
            let item = items.remove(index);
            log::info!("Deleted item {} ({})", item.id, item.title);
        }
    }
    true
}
