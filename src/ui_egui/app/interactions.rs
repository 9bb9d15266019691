use super::CadenceApp;
use crate::models::block::{BlockState, Commitment, Persistence, Provenance};
use crate::models::item::{ItemKind, TimeRangedItem};
use crate::services::grid_snap::GridSnapCalculator;
use crate::ui_egui::views::day_header::render_day_header;
use crate::ui_egui::views::palette::TimeGridPalette;
use crate::ui_egui::views::time_grid::render_time_grid;
use crate::ui_egui::views::{GridInteractionResult, ItemMove, ItemResize};
use chrono::{Local, NaiveDate};

/// Length of an item created by double-clicking the grid
const CREATED_DURATION_HOURS: f64 = 1.0;

impl CadenceApp {
    pub(super) fn snap_calculator(&self) -> GridSnapCalculator {
        GridSnapCalculator::new(self.settings.grid)
    }

    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context) -> GridInteractionResult {
        let mut result = GridInteractionResult::default();
        let palette = TimeGridPalette::from_visuals(&ctx.style().visuals);
        let dates = self.visible_dates();
        let now = Local::now().naive_local();
        let calc = self.snap_calculator();

        egui::CentralPanel::default().show(ctx, |ui| {
            result.clicked_item = render_day_header(
                ui,
                &dates,
                &self.items,
                now.date(),
                &self.settings.item_filter(),
                &palette,
            );
            ui.separator();

            let mut scroll_area = egui::ScrollArea::vertical()
                .id_source("time_grid_scroll")
                .auto_shrink([false, false]);
            if let Some(offset) = self.scroll.take_pending() {
                scroll_area = scroll_area.vertical_scroll_offset(offset);
            }

            let output = scroll_area.show(ui, |ui| {
                render_time_grid(
                    ui,
                    &dates,
                    &self.items,
                    &self.settings,
                    &palette,
                    &mut self.gestures,
                    self.selected_item.as_deref(),
                    now,
                )
            });
            result.merge(output.inner);

            let time = ctx.input(|i| i.time);
            let gesture_active = self.gestures.is_active();
            if self
                .scroll
                .observe(output.state.offset.y, time, gesture_active, &calc)
                .is_some()
            {
                ctx.request_repaint();
            } else if self.scroll.is_waiting() {
                ctx.request_repaint_after(std::time::Duration::from_millis(50));
            }
        });

        result
    }

    pub(super) fn apply_interactions(&mut self, result: GridInteractionResult) {
        if let Some(id) = result.clicked_item {
            log::debug!("Selected item {}", id);
            self.selected_item = Some(id);
        } else if result.background_clicked {
            self.selected_item = None;
        }

        for item_move in &result.moved {
            if !apply_move(&mut self.items, item_move) {
                log::warn!("Dropped move for unknown item {}", item_move.item_id);
            }
        }

        for resize in &result.resized {
            if !apply_resize(&mut self.items, resize) {
                log::warn!("Dropped resize for unknown item {}", resize.item_id);
            }
        }

        if let Some((date, start_hour)) = result.create_at {
            let calc = self.snap_calculator();
            let item = new_item(self.next_item_id, date, start_hour, &calc);
            log::info!(
                "Created item {} on {} at {:.2}h",
                item.id,
                item.date,
                item.start_hour
            );
            self.next_item_id += 1;
            self.selected_item = Some(item.id.clone());
            self.items.push(item);
        }
    }
}

/// Changed items are flagged as moved and waiting to sync
pub(super) fn mark_changed(block: &mut BlockState) {
    if block.commitment != Commitment::Completed {
        block.commitment = Commitment::Changed;
    }
    block.persistence = Persistence::SyncPending;
}

fn apply_move(items: &mut [TimeRangedItem], item_move: &ItemMove) -> bool {
    let Some(item) = items.iter_mut().find(|item| item.id == item_move.item_id) else {
        return false;
    };
    log::info!(
        "Moved item {} from {} {:.2}h to {} {:.2}h",
        item.id,
        item.date,
        item.start_hour,
        item_move.date,
        item_move.start_hour
    );
    item.date = item_move.date;
    item.start_hour = item_move.start_hour;
    mark_changed(&mut item.block);
    true
}

fn apply_resize(items: &mut [TimeRangedItem], resize: &ItemResize) -> bool {
    let Some(item) = items.iter_mut().find(|item| item.id == resize.item_id) else {
        return false;
    };
    log::info!(
        "Resized item {} to {:.2}h + {:.2}h",
        item.id,
        resize.start_hour,
        resize.duration
    );
    item.start_hour = resize.start_hour;
    item.duration = resize.duration;
    mark_changed(&mut item.block);
    true
}

fn new_item(id: u64, date: NaiveDate, start_hour: f64, calc: &GridSnapCalculator) -> TimeRangedItem {
    let (_, end_bound) = calc.bounds();
    let duration = CREATED_DURATION_HOURS.min(end_bound - start_hour).max(0.0);

    TimeRangedItem {
        kind: ItemKind::Task,
        calendar: "personal".to_string(),
        block: BlockState {
            provenance: Some(Provenance::User),
            ..BlockState::default()
        },
        ..TimeRangedItem::new(id.to_string(), "New task", date, start_hour, duration)
    }
}
