use std::sync::LazyLock;

pub const ICON_TREND_UP: &str = "▲";
pub const ICON_TREND_DOWN: &str = "▼";
pub const ICON_CLOSE: &str = "✖";
pub const ICON_BACK: &str = "⬅";
pub const ICON_SEARCH: &str = "🔍";
pub const ICON_DROPDOWN: &str = "⏷";

pub struct UiText {
    pub app_title: String,
    pub app_tagline: String,

    pub icon_close: String,
    pub icon_trend_up: String,
    pub icon_trend_down: String,

    // --- Header ---
    pub label_currency_select: String,

    // --- Ticker ---
    pub ticker_error: String,

    // --- Catalog ---
    pub catalog_heading: String,
    pub catalog_search_hint: String,
    pub catalog_empty: String,
    pub catalog_col_rank: String,
    pub catalog_col_coin: String,
    pub catalog_col_price: String,
    pub catalog_col_change: String,
    pub catalog_col_market_cap: String,
    pub catalog_col_volume: String,
    pub pagination_prev: String,
    pub pagination_next: String,

    // --- Detail ---
    pub detail_back: String,
    pub detail_rank: String,
    pub detail_market_cap: String,
    pub detail_volume: String,
    pub detail_high: String,
    pub detail_low: String,
    pub detail_change: String,
    pub chart_open_line: String,
    pub chart_high_marker: String,
    pub chart_low_marker: String,
    pub chart_empty: String,

    /// Prefix for inline fetch failures: "Error: <message>".
    pub error_prefix: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Cryptoscope".to_string(),
    app_tagline: "Live crypto market overview".to_string(),

    icon_close: ICON_CLOSE.to_string(),
    icon_trend_up: ICON_TREND_UP.to_string(),
    icon_trend_down: ICON_TREND_DOWN.to_string(),

    label_currency_select: "Currency".to_string(),

    ticker_error: "Could not load ticker data.".to_string(),

    catalog_heading: "Today's Cryptocurrency Prices by Market Cap".to_string(),
    catalog_search_hint: format!("{} Search for a coin...", ICON_SEARCH),
    catalog_empty: "No coins found matching your search.".to_string(),
    catalog_col_rank: "#".to_string(),
    catalog_col_coin: "Coin".to_string(),
    catalog_col_price: "Price".to_string(),
    catalog_col_change: "24h %".to_string(),
    catalog_col_market_cap: "Market Cap".to_string(),
    catalog_col_volume: "Volume (24h)".to_string(),
    pagination_prev: "Prev".to_string(),
    pagination_next: "Next".to_string(),

    detail_back: format!("{} Back to list", ICON_BACK),
    detail_rank: "Rank".to_string(),
    detail_market_cap: "Market Cap".to_string(),
    detail_volume: "24h Volume".to_string(),
    detail_high: "24h High".to_string(),
    detail_low: "24h Low".to_string(),
    detail_change: "24h Change".to_string(),
    chart_open_line: "Open".to_string(),
    chart_high_marker: "High".to_string(),
    chart_low_marker: "Low".to_string(),
    chart_empty: "No price history for this range.".to_string(),

    error_prefix: "Error:".to_string(),
});

impl UiText {
    /// Header button text, e.g. `USD ⏷`.
    pub fn currency_button(&self, code: &str) -> String {
        format!("{} {}", code, ICON_DROPDOWN)
    }

    pub fn fetch_error(&self, message: &str) -> String {
        format!("{} {}", self.error_prefix, message)
    }
}
