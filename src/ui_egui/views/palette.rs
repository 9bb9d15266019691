use egui::{Color32, Visuals};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy, Debug)]
pub struct TimeGridPalette {
    pub hour_bg: Color32,
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub divider: Color32,
    pub label_text: Color32,
    pub header_text: Color32,
    pub today_accent: Color32,
    pub now_line: Color32,
    pub hover_overlay: Color32,
    pub ghost_border: Color32,
    pub block_text: Color32,
}

impl TimeGridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let is_dark = visuals.dark_mode;
        let day_bg = visuals.extreme_bg_color;
        let panel_bg = visuals.panel_fill;
        let border = visuals.widgets.noninteractive.bg_stroke.color;
        let accent = visuals.selection.bg_fill;

        Self {
            hour_bg: blend(panel_bg, day_bg, 0.4),
            regular_bg: day_bg,
            weekend_bg: blend(day_bg, panel_bg, 0.5),
            today_bg: blend(day_bg, accent, if is_dark { 0.18 } else { 0.1 }),
            hour_line: border,
            slot_line: with_alpha(border, 110),
            divider: with_alpha(border, 220),
            label_text: visuals.weak_text_color(),
            header_text: visuals.strong_text_color(),
            today_accent: accent,
            now_line: Color32::from_rgb(255, 100, 100),
            hover_overlay: with_alpha(accent, if is_dark { 80 } else { 50 }),
            ghost_border: with_alpha(accent, 200),
            block_text: visuals.text_color(),
        }
    }
}
