// Item Resize System
//
// Enables resizing timed items by dragging their top or bottom edge.
// - Top handle: moves the start, keeps the end
// - Bottom handle: moves the end, keeps the start

use chrono::NaiveDate;
use egui::{Pos2, Rect, Vec2};

use crate::models::item::TimeRangedItem;
use crate::services::grid_snap::GridSnapCalculator;

/// Which edge of the item is being resized
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeHandle {
    /// Top edge - adjusts start time
    Top,
    /// Bottom edge - adjusts end time
    Bottom,
}

impl ResizeHandle {
    pub fn cursor_icon(&self) -> egui::CursorIcon {
        egui::CursorIcon::ResizeVertical
    }
}

/// Visual size of the handle circle
pub const HANDLE_VISUAL_SIZE: f32 = 6.0;

/// Context for an active resize operation
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeContext {
    pub item_id: String,
    pub handle: ResizeHandle,
    pub date: NaiveDate,
    pub original_start: f64,
    pub original_duration: f64,
    /// Pointer y where the resize began
    pub origin_y: f32,
    pub preview_start: f64,
    pub preview_duration: f64,
}

impl ResizeContext {
    /// Start a resize, or `None` when the item is fixed or all-day
    pub fn new(item: &TimeRangedItem, handle: ResizeHandle, origin_y: f32) -> Option<Self> {
        if !item.is_draggable() {
            return None;
        }
        Some(Self {
            item_id: item.id.clone(),
            handle,
            date: item.date,
            original_start: item.effective_start(),
            original_duration: item.effective_duration(),
            origin_y,
            preview_start: item.effective_start(),
            preview_duration: item.effective_duration(),
        })
    }

    /// Recompute the preview from the current pointer y
    pub fn update(&mut self, calc: &GridSnapCalculator, pointer_y: f32) {
        let delta = (pointer_y - self.origin_y) as f64;
        match self.handle {
            ResizeHandle::Bottom => {
                self.preview_start = self.original_start;
                self.preview_duration =
                    calc.resize_end(self.original_start, self.original_duration, delta);
            }
            ResizeHandle::Top => {
                let (start, duration) =
                    calc.resize_start(self.original_start, self.original_duration, delta);
                self.preview_start = start;
                self.preview_duration = duration;
            }
        }
    }

    pub fn has_changed(&self) -> bool {
        self.preview_start != self.original_start
            || self.preview_duration != self.original_duration
    }
}

/// Hit zones for the resize handles of a block
pub struct HandleRects {
    pub top: Rect,
    pub bottom: Rect,
}

impl HandleRects {
    pub fn for_timed_block(block_rect: Rect) -> Self {
        let block_height = block_rect.height();

        // Short blocks split into top and bottom halves; taller ones get a
        // fixed zone at each edge
        let zone_height = if block_height < 50.0 {
            block_height / 2.0
        } else {
            12.0
        };

        Self {
            top: Rect::from_min_size(
                block_rect.left_top(),
                Vec2::new(block_rect.width(), zone_height),
            ),
            bottom: Rect::from_min_size(
                Pos2::new(block_rect.left(), block_rect.bottom() - zone_height),
                Vec2::new(block_rect.width(), zone_height),
            ),
        }
    }

    /// Check if a point hits a handle and return which one
    pub fn hit_test(&self, pos: Pos2) -> Option<ResizeHandle> {
        if self.top.contains(pos) {
            Some(ResizeHandle::Top)
        } else if self.bottom.contains(pos) {
            Some(ResizeHandle::Bottom)
        } else {
            None
        }
    }
}

/// Draw the handle dots on a hovered block
pub fn draw_handles(
    painter: &egui::Painter,
    handles: &HandleRects,
    hovered_handle: Option<ResizeHandle>,
    color: egui::Color32,
) {
    let draw_handle = |center: Pos2, is_hovered: bool| {
        let radius = if is_hovered {
            HANDLE_VISUAL_SIZE / 2.0 + 1.0
        } else {
            HANDLE_VISUAL_SIZE / 2.0
        };

        painter.circle_filled(
            center,
            radius,
            if is_hovered {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_rgba_unmultiplied(
                    color.r().saturating_add(60),
                    color.g().saturating_add(60),
                    color.b().saturating_add(60),
                    color.a(),
                )
            },
        );
        painter.circle_stroke(
            center,
            radius,
            egui::Stroke::new(1.0, color.linear_multiply(0.6)),
        );
    };

    draw_handle(
        Pos2::new(handles.top.center().x, handles.top.top() + HANDLE_VISUAL_SIZE / 2.0 + 2.0),
        hovered_handle == Some(ResizeHandle::Top),
    );
    draw_handle(
        Pos2::new(
            handles.bottom.center().x,
            handles.bottom.bottom() - HANDLE_VISUAL_SIZE / 2.0 - 2.0,
        ),
        hovered_handle == Some(ResizeHandle::Bottom),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> TimeRangedItem {
        let date = NaiveDate::from_ymd_opt(2023, 12, 18).unwrap();
        TimeRangedItem::new("8", "Add Screenshots", date, 10.0, 1.0)
    }

    #[test]
    fn test_handle_hit_test() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 100.0), Vec2::new(200.0, 60.0));
        let handles = HandleRects::for_timed_block(rect);

        assert_eq!(handles.hit_test(Pos2::new(200.0, 101.0)), Some(ResizeHandle::Top));
        assert_eq!(handles.hit_test(Pos2::new(200.0, 159.0)), Some(ResizeHandle::Bottom));
        assert_eq!(handles.hit_test(Pos2::new(200.0, 130.0)), None);
    }

    #[test]
    fn test_short_block_splits_in_half() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(100.0, 20.0));
        let handles = HandleRects::for_timed_block(rect);
        assert_eq!(handles.top.height(), 10.0);
        assert_eq!(handles.hit_test(Pos2::new(50.0, 15.0)), Some(ResizeHandle::Bottom));
    }

    #[test]
    fn test_bottom_resize_snaps_duration() {
        let calc = GridSnapCalculator::default();
        let mut resize = ResizeContext::new(&item(), ResizeHandle::Bottom, 600.0).unwrap();

        resize.update(&calc, 631.0);
        assert_eq!(resize.preview_start, 10.0);
        assert_eq!(resize.preview_duration, 1.5);
        assert!(resize.has_changed());
    }

    #[test]
    fn test_top_resize_keeps_end() {
        let calc = GridSnapCalculator::default();
        let mut resize = ResizeContext::new(&item(), ResizeHandle::Top, 600.0).unwrap();

        resize.update(&calc, 570.0);
        assert_eq!(resize.preview_start, 9.5);
        assert_eq!(resize.preview_start + resize.preview_duration, 11.0);
    }

    #[test]
    fn test_fixed_item_cannot_resize() {
        let mut fixed = item();
        fixed.is_fixed = true;
        assert!(ResizeContext::new(&fixed, ResizeHandle::Bottom, 0.0).is_none());
    }
}
