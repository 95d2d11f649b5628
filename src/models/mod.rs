mod chart;
mod coin;

pub use {
    chart::{ChartPoint, PricePoint},
    coin::{Coin, Trend},
};

#[cfg(test)]
pub(crate) use coin::sample_coin;
