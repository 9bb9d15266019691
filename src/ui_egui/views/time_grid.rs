//! Time grid rendering for day and week views.
//!
//! Paints the hour gutter and day columns, lays out each day's items with the
//! overlap layout, and turns pointer input into moves, resizes, selections
//! and create requests. Gesture state lives in [`GestureState`], owned by the
//! caller, so nothing here persists between frames on its own.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use egui::{Align2, CursorIcon, FontId, Painter, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::item_block::{format_item_tooltip, paint_block, paint_ghost};
use super::palette::TimeGridPalette;
use super::utils::{block_rect, date_at};
use super::{
    column_width, GestureState, GridInteractionResult, ItemMove, ItemResize, COLUMN_SPACING,
    TIME_LABEL_WIDTH,
};
use crate::models::item::TimeRangedItem;
use crate::models::settings::Settings;
use crate::services::grid_snap::GridSnapCalculator;
use crate::services::layout::layouts_for_day;
use crate::ui_egui::drag::DragContext;
use crate::ui_egui::resize::{draw_handles, HandleRects, ResizeContext};
use crate::utils::time::{format_hour, hour_of};

const MIN_SLOT_SPACING_PX: f64 = 4.0;

/// Geometry shared by the painting and interaction passes
struct GridGeometry {
    rect: Rect,
    days_left: f32,
    col_width: f32,
}

impl GridGeometry {
    fn column_rect(&self, index: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(self.days_left + index as f32 * self.col_width, self.rect.top()),
            Vec2::new(self.col_width - COLUMN_SPACING, self.rect.height()),
        )
    }

    /// Pixel offset from the top of the grid
    fn offset(&self, y: f32) -> f64 {
        (y - self.rect.top()) as f64
    }
}

/// Render the full time grid for a set of dates.
#[allow(clippy::too_many_arguments)]
pub fn render_time_grid(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    items: &[TimeRangedItem],
    settings: &Settings,
    palette: &TimeGridPalette,
    gestures: &mut GestureState,
    selected: Option<&str>,
    now: NaiveDateTime,
) -> GridInteractionResult {
    let mut result = GridInteractionResult::default();
    let calc = GridSnapCalculator::new(settings.grid);

    let col_width = column_width(ui.available_width(), dates.len());
    let size = Vec2::new(
        TIME_LABEL_WIDTH + col_width * dates.len() as f32,
        calc.grid_height_px() as f32,
    );
    let (rect, background) = ui.allocate_exact_size(size, Sense::click());
    let geometry = GridGeometry {
        rect,
        days_left: rect.left() + TIME_LABEL_WIDTH,
        col_width,
    };
    let painter = ui.painter_at(rect);

    draw_background(&painter, &geometry, &calc, dates, now.date(), settings, palette);

    let filter = settings.item_filter();
    for (index, date) in dates.iter().enumerate() {
        let column = geometry.column_rect(index);
        let layouts = layouts_for_day(items, *date, &filter, settings.column_width);

        for layout in &layouts {
            let item = layout.item;
            let top = rect.top() + calc.offset_for_hour(item.effective_start()) as f32;
            let height = calc.block_height_px(item.effective_duration()) as f32;
            let block = block_rect(column, layout, top, height, settings.grid.gutter_px as f32);

            let emphasis = selected == Some(item.id.as_str())
                || gestures.active_item() == Some(item.id.as_str());
            paint_block(&painter, block, item, &settings.time_format, palette, emphasis);

            let id = ui.id().with(("time_grid_item", &item.id));
            let response = ui.interact(block, id, Sense::click_and_drag());
            handle_block_response(
                ui,
                &painter,
                &response,
                block,
                item,
                &geometry,
                gestures,
                &mut result,
                settings,
                palette,
            );
        }
    }

    update_gestures(ui, &geometry, &calc, dates, gestures);
    draw_previews(&painter, &geometry, &calc, dates, items, gestures, settings, palette);
    commit_gestures(ui, gestures, &mut result);

    if background.double_clicked() {
        if let Some(pos) = background.interact_pointer_pos() {
            if pos.x >= geometry.days_left {
                if let Some(date) = date_at(pos.x, geometry.days_left, col_width, dates) {
                    let start = calc.start_for_create(geometry.offset(pos.y));
                    result.create_at = Some((date, start));
                }
            }
        }
    } else if background.clicked() {
        result.background_clicked = true;
    }

    draw_current_time_indicator(&painter, &geometry, &calc, dates, now, palette);

    result
}

fn draw_background(
    painter: &Painter,
    geometry: &GridGeometry,
    calc: &GridSnapCalculator,
    dates: &[NaiveDate],
    today: NaiveDate,
    settings: &Settings,
    palette: &TimeGridPalette,
) {
    let rect = geometry.rect;
    let gutter = Rect::from_min_max(rect.left_top(), Pos2::new(geometry.days_left, rect.bottom()));
    painter.rect_filled(gutter, 0.0, palette.hour_bg);

    for (index, date) in dates.iter().enumerate() {
        let fill = if *date == today {
            palette.today_bg
        } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };
        painter.rect_filled(geometry.column_rect(index), 0.0, fill);
    }

    let (start, end) = calc.bounds();
    let mut hour = start.ceil();
    while hour <= end {
        let y = rect.top() + calc.offset_for_hour(hour) as f32;
        painter.line_segment(
            [Pos2::new(geometry.days_left, y), Pos2::new(rect.right(), y)],
            Stroke::new(1.0, palette.hour_line),
        );

        if hour < end {
            let anchor = if hour <= start { Align2::RIGHT_TOP } else { Align2::RIGHT_CENTER };
            painter.text(
                Pos2::new(geometry.days_left - 6.0, y),
                anchor,
                format_hour(hour, &settings.time_format),
                FontId::proportional(11.0),
                palette.label_text,
            );
        }
        hour += 1.0;
    }

    for slot in slot_line_hours(calc) {
        let y = rect.top() + calc.offset_for_hour(slot) as f32;
        let width = if is_whole(slot * 2.0) { 1.0 } else { 0.5 };
        painter.line_segment(
            [Pos2::new(geometry.days_left, y), Pos2::new(rect.right(), y)],
            Stroke::new(width, palette.slot_line),
        );
    }

    for index in 0..=dates.len() {
        let x = geometry.days_left + index as f32 * geometry.col_width - COLUMN_SPACING / 2.0;
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(COLUMN_SPACING, palette.divider),
        );
    }
}

/// Hours between the hour lines where an item can snap, one per increment.
///
/// Empty when the lines would be closer than `MIN_SLOT_SPACING_PX`.
fn slot_line_hours(calc: &GridSnapCalculator) -> Vec<f64> {
    let increment = calc.snap_increment();
    let (start, end) = calc.bounds();
    if calc.offset_for_hour(start + increment) < MIN_SLOT_SPACING_PX {
        return Vec::new();
    }

    let first = (start / increment).ceil() as i64;
    let last = (end / increment).floor() as i64;
    (first..=last)
        .map(|n| n as f64 * increment)
        .filter(|&hour| hour > start && hour < end && !is_whole(hour))
        .collect()
}

fn is_whole(hour: f64) -> bool {
    (hour - hour.round()).abs() < 1e-9
}

#[allow(clippy::too_many_arguments)]
fn handle_block_response(
    ui: &egui::Ui,
    painter: &Painter,
    response: &egui::Response,
    block: Rect,
    item: &TimeRangedItem,
    geometry: &GridGeometry,
    gestures: &mut GestureState,
    result: &mut GridInteractionResult,
    settings: &Settings,
    palette: &TimeGridPalette,
) {
    let handles = HandleRects::for_timed_block(block);

    if !gestures.is_active() && response.hovered() {
        painter.rect_filled(block, Rounding::same(3.0), palette.hover_overlay);
        if item.is_draggable() {
            let hovered_handle = response.hover_pos().and_then(|pos| handles.hit_test(pos));
            ui.ctx().set_cursor_icon(match hovered_handle {
                Some(_) => CursorIcon::ResizeVertical,
                None => CursorIcon::Grab,
            });
            draw_handles(painter, &handles, hovered_handle, palette.ghost_border);
        }
        response
            .clone()
            .on_hover_text(format_item_tooltip(item, &settings.time_format));
    }

    if response.clicked() {
        result.clicked_item = Some(item.id.clone());
    }

    if response.drag_started() && !gestures.is_active() {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        let Some(origin) = origin else {
            return;
        };

        if let Some(handle) = handles.hit_test(origin) {
            gestures.resize = ResizeContext::new(item, handle, geometry.offset(origin.y) as f32);
        } else {
            gestures.drag = DragContext::from_item(item, (origin.y - block.top()) as f64);
        }

        match (&gestures.drag, &gestures.resize) {
            (Some(_), _) => log::debug!("Started moving item {}", item.id),
            (_, Some(resize)) => log::debug!("Started resizing item {} ({:?})", item.id, resize.handle),
            _ => log::debug!("Item {} is fixed; ignoring drag", item.id),
        }
    }
}

fn update_gestures(
    ui: &egui::Ui,
    geometry: &GridGeometry,
    calc: &GridSnapCalculator,
    dates: &[NaiveDate],
    gestures: &mut GestureState,
) {
    if !gestures.is_active() {
        return;
    }
    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        gestures.cancel();
        return;
    }

    let Some(pointer) = ui.ctx().pointer_latest_pos() else {
        return;
    };

    if let Some(drag) = gestures.drag.as_mut() {
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        if let Some(date) = date_at(pointer.x, geometry.days_left, geometry.col_width, dates) {
            let start =
                calc.start_for_move(geometry.offset(pointer.y), drag.grab_offset_px, drag.duration);
            drag.update_hover(date, start);
        }
    }

    if let Some(resize) = gestures.resize.as_mut() {
        ui.ctx().set_cursor_icon(resize.handle.cursor_icon());
        resize.update(calc, geometry.offset(pointer.y) as f32);
    }

    ui.ctx().request_repaint();
}

#[allow(clippy::too_many_arguments)]
fn draw_previews(
    painter: &Painter,
    geometry: &GridGeometry,
    calc: &GridSnapCalculator,
    dates: &[NaiveDate],
    items: &[TimeRangedItem],
    gestures: &GestureState,
    settings: &Settings,
    palette: &TimeGridPalette,
) {
    let gutter = settings.grid.gutter_px as f32;
    let preview_rect = |date: NaiveDate, start: f64, duration: f64| -> Option<Rect> {
        let index = dates.iter().position(|d| *d == date)?;
        let column = geometry.column_rect(index);
        let top = geometry.rect.top() + calc.offset_for_hour(start) as f32;
        Some(Rect::from_min_size(
            Pos2::new(column.left() + gutter / 2.0, top),
            Vec2::new(column.width() - gutter, calc.block_height_px(duration) as f32),
        ))
    };
    let find = |id: &str| items.iter().find(|item| item.id == id);

    if let Some(drag) = &gestures.drag {
        if let (Some(item), Some(rect)) = (
            find(&drag.item_id),
            preview_rect(drag.hovered_date, drag.hovered_start, drag.duration),
        ) {
            paint_ghost(painter, rect, item, palette);
            painter.text(
                rect.left_top() + Vec2::new(6.0, 2.0),
                Align2::LEFT_TOP,
                format_hour(drag.hovered_start, &settings.time_format),
                FontId::proportional(10.0),
                palette.block_text,
            );
        }
    }

    if let Some(resize) = &gestures.resize {
        if let (Some(item), Some(rect)) = (
            find(&resize.item_id),
            preview_rect(resize.date, resize.preview_start, resize.preview_duration),
        ) {
            paint_ghost(painter, rect, item, palette);
        }
    }
}

fn commit_gestures(ui: &egui::Ui, gestures: &mut GestureState, result: &mut GridInteractionResult) {
    if !gestures.is_active() || !ui.input(|i| i.pointer.any_released()) {
        return;
    }

    if let Some(drag) = gestures.drag.take() {
        if drag.has_moved() {
            result.moved.push(ItemMove {
                item_id: drag.item_id,
                date: drag.hovered_date,
                start_hour: drag.hovered_start,
            });
        }
    }

    if let Some(resize) = gestures.resize.take() {
        if resize.has_changed() {
            result.resized.push(ItemResize {
                item_id: resize.item_id,
                start_hour: resize.preview_start,
                duration: resize.preview_duration,
            });
        }
    }
}

/// Draw the current time indicator line across today's column.
fn draw_current_time_indicator(
    painter: &Painter,
    geometry: &GridGeometry,
    calc: &GridSnapCalculator,
    dates: &[NaiveDate],
    now: NaiveDateTime,
    palette: &TimeGridPalette,
) {
    let Some(day_index) = dates.iter().position(|d| *d == now.date()) else {
        return;
    };
    let hour = hour_of(now.time());
    let (start, end) = calc.bounds();
    if hour < start || hour > end {
        return;
    }

    let y = geometry.rect.top() + calc.offset_for_hour(hour) as f32;
    let column = geometry.column_rect(day_index);

    painter.circle_filled(Pos2::new(column.left() + 1.0, y), 3.5, palette.now_line);
    painter.line_segment(
        [Pos2::new(column.left(), y), Pos2::new(column.right(), y)],
        Stroke::new(2.0, palette.now_line),
    );
}
