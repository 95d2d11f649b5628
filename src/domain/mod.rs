// Domain types and value objects
mod currency;
mod time_range;

pub use currency::{Currency, Locale};
pub use time_range::{ChartDays, TimeRange};
