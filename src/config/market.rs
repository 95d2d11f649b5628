/// Where market data comes from and how much of it each view asks for.
pub struct MarketConfig {
    /// CoinGecko v3 REST root (no trailing slash).
    pub base_url: &'static str,
    pub user_agent: &'static str,
    /// Coins fetched for the searchable catalog.
    pub catalog_size: u32,
    /// Coins fetched for the scrolling ticker.
    pub ticker_size: u32,
    /// Catalog rows per page.
    pub page_size: usize,
}

pub const MARKET: MarketConfig = MarketConfig {
    base_url: "https://api.coingecko.com/api/v3",
    user_agent: concat!("cryptoscope/", env!("CARGO_PKG_VERSION")),
    catalog_size: 100,
    ticker_size: 15,
    page_size: 10,
};
