use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub trend_up: Color32,
    pub trend_down: Color32,
    pub tone_positive: Color32,
    pub tone_caution: Color32,
    pub tone_negative: Color32,
    pub tone_neutral: Color32,
    pub future_line: Color32,
    pub historical_line: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub chart_height: f32,
    pub side_panel_min_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(255, 153, 0), // marketplace orange
        subsection_heading: Color32::from_rgb(210, 180, 120),
        central_panel: Color32::from_rgb(24, 28, 33),
        side_panel: Color32::from_rgb(35, 47, 62), // dark navy
        trend_up: Color32::from_rgb(130, 200, 140),
        trend_down: Color32::from_rgb(220, 120, 120),
        tone_positive: Color32::from_rgb(130, 200, 140),
        tone_caution: Color32::from_rgb(220, 200, 120),
        tone_negative: Color32::from_rgb(220, 120, 120),
        tone_neutral: Color32::from_rgb(170, 170, 170),
        future_line: Color32::from_rgb(255, 153, 0),
        historical_line: Color32::from_rgb(120, 160, 220),
    },
    chart_height: 240.0,
    side_panel_min_width: 220.0,
};
