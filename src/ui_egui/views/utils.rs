//! Pure helpers shared by the time grid renderers.

use chrono::NaiveDate;
use egui::{Color32, Pos2, Rect, Vec2};

use crate::services::layout::ItemLayout;

/// Fallback fill for items without a usable colour
pub const DEFAULT_ITEM_COLOR: Color32 = Color32::from_rgb(15, 98, 254);

/// Parse a hex color string to Color32.
///
/// # Arguments
/// * `hex` - A hex color string, optionally prefixed with '#' (e.g., "#FF5500" or "FF5500")
///
/// # Returns
/// * `Some(Color32)` if parsing succeeds
/// * `None` if the input is empty or invalid
pub fn parse_color(hex: &str) -> Option<Color32> {
    if hex.is_empty() {
        return None;
    }

    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

/// `color` with its alpha replaced by a 0..=1 factor
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Day column index under an x position, if any
pub fn column_at(x: f32, grid_left: f32, col_width: f32, days: usize) -> Option<usize> {
    if col_width <= 0.0 || x < grid_left {
        return None;
    }
    let index = ((x - grid_left) / col_width).floor() as usize;
    (index < days).then_some(index)
}

/// Date of the column under an x position, clamped to the visible days
pub fn date_at(x: f32, grid_left: f32, col_width: f32, dates: &[NaiveDate]) -> Option<NaiveDate> {
    let last = dates.len().checked_sub(1)?;
    let index = if x < grid_left {
        0
    } else {
        column_at(x, grid_left, col_width, dates.len()).unwrap_or(last)
    };
    dates.get(index).copied()
}

/// Horizontal slice of a day column occupied by a laid-out item
pub fn block_rect(
    column_rect: Rect,
    layout: &ItemLayout<'_>,
    top: f32,
    height: f32,
    gutter: f32,
) -> Rect {
    let width = column_rect.width() * (layout.width_percent() / 100.0) as f32;
    let left = column_rect.left() + column_rect.width() * (layout.left_percent() / 100.0) as f32;

    Rect::from_min_size(
        Pos2::new(left + gutter / 2.0, top),
        Vec2::new((width - gutter).max(1.0), height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::TimeRangedItem;

    #[test]
    fn test_parse_color_with_hash() {
        let color = parse_color("#FF5500").unwrap();
        assert_eq!(color, Color32::from_rgb(255, 85, 0));
    }

    #[test]
    fn test_parse_color_without_hash() {
        let color = parse_color("00FF00").unwrap();
        assert_eq!(color, Color32::from_rgb(0, 255, 0));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert!(parse_color("").is_none());
        assert!(parse_color("FF5").is_none());
        assert!(parse_color("GGGGGG").is_none());
        assert!(parse_color("#ééé").is_none());
    }

    #[test]
    fn test_column_at() {
        assert_eq!(column_at(50.0, 50.0, 100.0, 7), Some(0));
        assert_eq!(column_at(349.0, 50.0, 100.0, 7), Some(2));
        assert_eq!(column_at(750.0, 50.0, 100.0, 7), None);
        assert_eq!(column_at(10.0, 50.0, 100.0, 7), None);
    }

    #[test]
    fn test_date_at_clamps_to_visible_days() {
        let monday = NaiveDate::from_ymd_opt(2023, 12, 18).unwrap();
        let dates: Vec<NaiveDate> = (0..3).map(|d| monday + chrono::Duration::days(d)).collect();

        assert_eq!(date_at(10.0, 50.0, 100.0, &dates), Some(dates[0]));
        assert_eq!(date_at(180.0, 50.0, 100.0, &dates), Some(dates[1]));
        assert_eq!(date_at(900.0, 50.0, 100.0, &dates), Some(dates[2]));
        assert_eq!(date_at(100.0, 50.0, 100.0, &[]), None);
    }

    #[test]
    fn test_block_rect_uses_layout_slot() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 18).unwrap();
        let item = TimeRangedItem::new("1", "A", date, 9.0, 1.0);
        let layout = ItemLayout {
            item: &item,
            column: 1,
            total_columns: 2,
        };
        let column = Rect::from_min_size(Pos2::new(100.0, 0.0), Vec2::new(200.0, 1440.0));

        let rect = block_rect(column, &layout, 540.0, 60.0, 2.0);
        assert_eq!(rect.left(), 201.0);
        assert_eq!(rect.width(), 98.0);
        assert_eq!(rect.top(), 540.0);
    }
}
