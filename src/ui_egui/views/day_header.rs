//! Column headers above the time grid, with all-day items as chips.

use chrono::NaiveDate;
use egui::{Align2, FontId, Pos2, Rect, Rounding, Sense, Vec2};

use super::palette::TimeGridPalette;
use super::utils::{parse_color, with_opacity, DEFAULT_ITEM_COLOR};
use super::{column_width, COLUMN_SPACING, TIME_LABEL_WIDTH};
use crate::models::item::{ItemFilter, TimeRangedItem};

const DATE_ROW_HEIGHT: f32 = 36.0;
const CHIP_HEIGHT: f32 = 18.0;
const CHIP_SPACING: f32 = 2.0;

/// All-day items shown in a column, in id order for a stable stack
pub fn all_day_items<'a>(
    items: &'a [TimeRangedItem],
    date: NaiveDate,
    filter: &ItemFilter,
) -> Vec<&'a TimeRangedItem> {
    let mut day: Vec<&TimeRangedItem> = items
        .iter()
        .filter(|item| item.all_day && item.date == date)
        .filter(|item| filter.admits(item))
        .collect();
    day.sort_by(|a, b| a.id.cmp(&b.id));
    day
}

/// Render the header row. Returns the id of a clicked all-day chip.
pub fn render_day_header(
    ui: &mut egui::Ui,
    dates: &[NaiveDate],
    items: &[TimeRangedItem],
    today: NaiveDate,
    filter: &ItemFilter,
    palette: &TimeGridPalette,
) -> Option<String> {
    let col_width = column_width(ui.available_width(), dates.len());
    let chip_rows = dates
        .iter()
        .map(|date| all_day_items(items, *date, filter).len())
        .max()
        .unwrap_or(0);
    let height = DATE_ROW_HEIGHT + chip_rows as f32 * (CHIP_HEIGHT + CHIP_SPACING);

    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(TIME_LABEL_WIDTH + col_width * dates.len() as f32, height),
        Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let mut clicked = None;

    for (index, date) in dates.iter().enumerate() {
        let left = rect.left() + TIME_LABEL_WIDTH + index as f32 * col_width;
        let column = Rect::from_min_size(
            Pos2::new(left, rect.top()),
            Vec2::new(col_width - COLUMN_SPACING, height),
        );
        let is_today = *date == today;

        if is_today {
            painter.rect_filled(column, Rounding::same(4.0), palette.today_bg);
        }
        painter.text(
            Pos2::new(column.center().x, rect.top() + 4.0),
            Align2::CENTER_TOP,
            date.format("%a").to_string(),
            FontId::proportional(11.0),
            palette.label_text,
        );
        painter.text(
            Pos2::new(column.center().x, rect.top() + 17.0),
            Align2::CENTER_TOP,
            date.format("%-d").to_string(),
            FontId::proportional(15.0),
            if is_today {
                palette.today_accent
            } else {
                palette.header_text
            },
        );

        for (row, item) in all_day_items(items, *date, filter).iter().enumerate() {
            let chip = Rect::from_min_size(
                Pos2::new(
                    column.left() + 2.0,
                    rect.top() + DATE_ROW_HEIGHT + row as f32 * (CHIP_HEIGHT + CHIP_SPACING),
                ),
                Vec2::new(column.width() - 4.0, CHIP_HEIGHT),
            );
            let color = item
                .color
                .as_deref()
                .and_then(parse_color)
                .unwrap_or(DEFAULT_ITEM_COLOR);
            painter.rect_filled(chip, Rounding::same(3.0), with_opacity(color, 0.35));
            painter.with_clip_rect(chip).text(
                Pos2::new(chip.left() + 4.0, chip.center().y),
                Align2::LEFT_CENTER,
                &item.title,
                FontId::proportional(10.0),
                palette.block_text,
            );

            let response = ui
                .interact(chip, ui.id().with(("all_day_chip", &item.id)), Sense::click())
                .on_hover_text(&item.title);
            if response.clicked() {
                clicked = Some(item.id.clone());
            }
        }
    }

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_day_items_filters_and_sorts() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 17).unwrap();
        let mut routine = TimeRangedItem::new("2", "Paris Vlog Revision Period", date, 0.0, 0.0);
        routine.all_day = true;
        let mut done = TimeRangedItem::new("1", "Morning Routine", date, 0.0, 0.0);
        done.all_day = true;
        done.completed = true;
        let timed = TimeRangedItem::new("3", "Holiday Open House", date, 10.0, 2.0);
        let items = vec![routine, done, timed];

        let visible: Vec<&str> = all_day_items(&items, date, &ItemFilter::default())
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(visible, vec!["2"]);

        let all: Vec<&str> = all_day_items(&items, date, &ItemFilter::all())
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(all, vec!["1", "2"]);

        let work_only = ItemFilter {
            hidden_calendars: ["personal".to_string()].into(),
            ..ItemFilter::all()
        };
        let mut holiday = items[0].clone();
        holiday.id = "4".into();
        holiday.calendar = "personal".into();
        let items = vec![items[0].clone(), holiday];
        let shown: Vec<&str> = all_day_items(&items, date, &work_only)
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(shown, vec!["2"]);
    }
}
