#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for coin_table.rs and integration tests)
pub use app::App;
pub use config::MARKET;
pub use data::{CoinGeckoProvider, FetchError, MarketDataProvider};
pub use domain::{ChartDays, Currency, TimeRange};
pub use models::{ChartPoint, Coin, PricePoint};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Crypto market dashboard", long_about = None)]
pub struct Cli {
    /// Currency prices are shown in at startup
    #[arg(long, value_enum, default_value_t = Currency::Usd)]
    pub currency: Currency,

    /// Market data API root (CoinGecko v3 compatible)
    #[arg(long, default_value = MARKET.base_url)]
    pub api_base_url: String,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            api_base_url: MARKET.base_url.to_string(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
