use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Below this width the catalog drops its market cap and volume columns.
    pub narrow_width: f32,
    /// Widest the central column grows on large screens.
    pub max_content_width: f32,
    pub coin_icon_size: f32,
    pub detail_icon_size: f32,
    pub table_row_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(209, 213, 219),
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(156, 163, 175),
        central_panel: Color32::from_rgb(17, 24, 39),
        side_panel: Color32::from_rgb(31, 41, 55),
        card: Color32::from_rgb(31, 41, 55),
        card_border: Color32::from_rgb(55, 65, 81),
    },
    narrow_width: 720.0,
    max_content_width: 1200.0,
    coin_icon_size: 24.0,
    detail_icon_size: 48.0,
    table_row_height: 40.0,
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Rounded panel behind the table and the detail sections.
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
