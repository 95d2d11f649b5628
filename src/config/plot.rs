//! Chart and semantic colour configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub price_line_color: Color32,
    pub price_line_width: f32,
    /// Dashed "Open" reference on the 24H chart.
    pub open_line_color: Color32,
    pub high_marker_color: Color32,
    pub low_marker_color: Color32,
    pub marker_radius: f32,
    /// Y-axis padding factor (e.g. 0.05 = 5% above the high and below the low)
    pub plot_y_padding_pct: f64,
    /// Target number of x-axis labels across the plot width.
    pub x_label_count: f64,
    pub chart_height: f32,

    // --- SEMANTIC COLORS ---
    pub color_up: Color32,
    pub color_down: Color32,
    pub color_info: Color32,
    pub color_error: Color32,

    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    // UI WIDGET STYLES
    pub color_widget_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(56, 189, 248), // Sky blue
    price_line_width: 2.0,
    open_line_color: Color32::from_rgba_premultiplied(80, 87, 96, 128),
    high_marker_color: Color32::from_rgb(74, 222, 128),
    low_marker_color: Color32::from_rgb(248, 113, 113),
    marker_radius: 4.0,
    plot_y_padding_pct: 0.05,
    x_label_count: 6.0,
    chart_height: 420.0,

    color_up: Color32::from_rgb(74, 222, 128),
    color_down: Color32::from_rgb(248, 113, 113),
    color_info: Color32::from_rgb(34, 211, 238), // Cyan
    color_error: Color32::from_rgb(239, 68, 68),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_widget_border: Color32::from_gray(60),
};
