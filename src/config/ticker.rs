use eframe::egui::Color32;

pub struct TickerConfig {
    pub height: f32,
    pub speed_pixels_per_sec: f32,
    pub font_size: f32,
    pub item_spacing: f32,
    pub icon_size: f32,
    pub background_color: Color32,

    // Colors
    pub text_color_symbol: Color32,
    pub text_color_price: Color32,
    pub text_color_up: Color32,
    pub text_color_down: Color32,
    pub skeleton_color: Color32,
    /// Placeholder blocks drawn while the first fetch is in flight.
    pub skeleton_count: usize,
}

pub const TICKER: TickerConfig = TickerConfig {
    height: 44.0,
    speed_pixels_per_sec: 60.0, // Keep at 60 - perfect number for 60fps monitors etc.
    font_size: 13.0,
    item_spacing: 40.0,
    icon_size: 24.0,
    background_color: Color32::from_rgb(22, 28, 38),

    text_color_symbol: Color32::WHITE,
    text_color_price: Color32::LIGHT_GRAY,
    text_color_up: Color32::from_rgb(74, 222, 128),
    text_color_down: Color32::from_rgb(248, 113, 113),
    skeleton_color: Color32::from_rgb(55, 65, 81),
    skeleton_count: 15,
};
