//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod debug;
mod market;
mod ticker;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::{DF, LogFlags};
pub use market::{MARKET, MarketConfig};
pub use plot::PLOT_CONFIG;
pub use ticker::TICKER;
