use async_trait::async_trait;

use crate::data::FetchResult;
use crate::domain::{ChartDays, Currency};
use crate::models::{Coin, PricePoint};

#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSend for T {}

#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSync: Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Sync> MaybeSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSync {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSync for T {}

/// Abstract interface for fetching market data.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: MaybeSend + MaybeSync {
    /// Coins ranked by descending market cap. `page` and `per_page` are 1-based and non-zero.
    async fn list_markets(
        &self,
        currency: Currency,
        page: u32,
        per_page: u32,
    ) -> FetchResult<Vec<Coin>>;

    /// Chronological price series for one coin over the last `days`.
    async fn price_history(
        &self,
        coin_id: &str,
        days: ChartDays,
        currency: Currency,
    ) -> FetchResult<Vec<PricePoint>>;
}
