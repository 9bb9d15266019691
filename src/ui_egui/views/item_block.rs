//! Painting for a single item block in the time grid.
//!
//! Fill, border and identity rail come from the block style table, so a
//! block's look is decided by its [`BlockState`](crate::models::block::BlockState)
//! and never by ad-hoc checks here.

use egui::{Color32, FontId, Painter, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use super::palette::TimeGridPalette;
use super::utils::{parse_color, with_opacity, DEFAULT_ITEM_COLOR};
use crate::models::item::TimeRangedItem;
use crate::services::block_style::{self, BorderStyle, Glyph, NEUTRAL_HUE};
use crate::utils::time::format_range;

const RAIL_WIDTH: f32 = 3.0;
const ROUNDING: f32 = 3.0;

/// Blocks shorter than this show the title only
const TWO_LINE_MIN_HEIGHT: f32 = 34.0;

fn glyph_text(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Lock => "🔒",
        Glyph::Spinner => "⟳",
        Glyph::Error => "⚠",
        Glyph::Check => "✔",
    }
}

fn identity_color(item: &TimeRangedItem) -> Color32 {
    item.color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(DEFAULT_ITEM_COLOR)
}

/// Paint `item` into `rect`.
///
/// `emphasis` brightens the border for the selected or hovered block.
pub fn paint_block(
    painter: &Painter,
    rect: Rect,
    item: &TimeRangedItem,
    time_format: &str,
    palette: &TimeGridPalette,
    emphasis: bool,
) {
    let identity = item.color.as_deref().unwrap_or("");
    let visual = block_style::resolve(&item.block, identity);

    let fill = parse_color(&visual.fill_color).unwrap_or_else(|| identity_color(item));
    let border = parse_color(&visual.border_color).unwrap_or_else(|| identity_color(item));

    painter.rect_filled(rect, Rounding::same(ROUNDING), with_opacity(fill, visual.fill_alpha));

    let border_alpha = if emphasis { 1.0 } else { visual.border_alpha };
    let stroke = Stroke::new(visual.border_width as f32, with_opacity(border, border_alpha));
    paint_border(painter, rect, visual.border_style, stroke);

    let rail_color = if visual.rail_muted {
        parse_color(NEUTRAL_HUE).unwrap_or(Color32::GRAY)
    } else {
        identity_color(item)
    };
    let rail = Rect::from_min_size(rect.left_top(), Vec2::new(RAIL_WIDTH, rect.height()));
    painter.rect_filled(
        rail,
        Rounding {
            nw: ROUNDING,
            sw: ROUNDING,
            ne: 0.0,
            se: 0.0,
        },
        rail_color,
    );

    paint_label(painter, rect, item, time_format, palette);
}

fn paint_border(painter: &Painter, rect: Rect, style: BorderStyle, stroke: Stroke) {
    if stroke.width <= 0.0 {
        return;
    }
    let outline = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    match style {
        BorderStyle::Solid => {
            painter.rect_stroke(rect, Rounding::same(ROUNDING), stroke);
        }
        BorderStyle::Dashed => painter.extend(Shape::dashed_line(&outline, stroke, 6.0, 4.0)),
        BorderStyle::Dotted => painter.extend(Shape::dotted_line(
            &outline,
            stroke.color,
            4.0,
            stroke.width.max(1.0) / 2.0 + 0.5,
        )),
    }
}

fn paint_label(
    painter: &Painter,
    rect: Rect,
    item: &TimeRangedItem,
    time_format: &str,
    palette: &TimeGridPalette,
) {
    let text_left = rect.left() + RAIL_WIDTH + 4.0;
    let wrap_width = (rect.right() - text_left - 2.0).max(1.0);
    let clipped = painter.with_clip_rect(rect.intersect(painter.clip_rect()));

    let mut title = String::new();
    for glyph in block_style::glyphs(&item.block) {
        title.push_str(glyph_text(glyph));
        title.push(' ');
    }
    title.push_str(&item.title);

    let title_galley = clipped.layout(
        title,
        FontId::proportional(11.0),
        palette.block_text,
        wrap_width,
    );
    let title_height = title_galley.size().y;
    clipped.galley(
        Pos2::new(text_left, rect.top() + 2.0),
        title_galley,
        palette.block_text,
    );

    if rect.height() >= TWO_LINE_MIN_HEIGHT {
        let range = format_range(item.effective_start(), item.effective_duration(), time_format);
        let range_galley = clipped.layout_no_wrap(
            range,
            FontId::proportional(10.0),
            palette.block_text.gamma_multiply(0.75),
        );
        clipped.galley(
            Pos2::new(text_left, rect.top() + 3.0 + title_height),
            range_galley,
            palette.block_text,
        );
    }
}

/// Translucent silhouette showing where a dragged or resized item will land
pub fn paint_ghost(painter: &Painter, rect: Rect, item: &TimeRangedItem, palette: &TimeGridPalette) {
    let color = identity_color(item);
    painter.rect_filled(rect, Rounding::same(ROUNDING), with_opacity(color, 0.25));
    painter.extend(Shape::dashed_line(
        &[
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ],
        Stroke::new(1.5, palette.ghost_border),
        5.0,
        3.0,
    ));
}

/// Hover text for a block
pub fn format_item_tooltip(item: &TimeRangedItem, time_format: &str) -> String {
    let mut lines = vec![item.title.clone()];
    lines.push(format_range(
        item.effective_start(),
        item.effective_duration(),
        time_format,
    ));

    let badges: Vec<&str> = block_style::badges(&item.block)
        .iter()
        .map(|badge| badge.label())
        .collect();
    if !badges.is_empty() {
        lines.push(badges.join(" · "));
    }

    if item.is_fixed {
        lines.push("Fixed time".to_string());
    } else {
        lines.push("Drag to move, drag an edge to resize".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::block::{BlockState, Commitment, Provenance};
    use chrono::NaiveDate;

    fn item() -> TimeRangedItem {
        let date = NaiveDate::from_ymd_opt(2023, 12, 18).unwrap();
        TimeRangedItem::new("10", "Triage Emails", date, 11.5, 1.0)
    }

    #[test]
    fn test_tooltip_lists_badges() {
        let mut item = item();
        item.block = BlockState {
            commitment: Commitment::Tentative,
            provenance: Some(Provenance::Email),
            ..BlockState::default()
        };

        let text = format_item_tooltip(&item, "24h");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Triage Emails");
        assert!(lines[2].contains("Tentative"));
        assert!(lines[2].contains(Provenance::Email.label()));
    }

    #[test]
    fn test_tooltip_marks_fixed_items() {
        let mut item = item();
        item.is_fixed = true;
        assert!(format_item_tooltip(&item, "12h").ends_with("Fixed time"));
    }

    #[test]
    fn test_identity_color_falls_back() {
        let mut item = item();
        item.color = Some("not a colour".into());
        assert_eq!(identity_color(&item), DEFAULT_ITEM_COLOR);

        item.color = Some("#24a148".into());
        assert_eq!(identity_color(&item), Color32::from_rgb(0x24, 0xa1, 0x48));
    }
}
