//! In-memory provider that counts calls, for view and subscription tests.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::data::{FetchError, FetchResult, MarketDataProvider};
use crate::domain::{ChartDays, Currency};
use crate::models::{Coin, PricePoint, sample_coin};

pub(crate) struct MockProvider {
    markets: Mutex<FetchResult<Vec<Coin>>>,
    /// When set, listings with this `per_page` fail while others succeed.
    failing_page_size: Mutex<Option<u32>>,
    history: Mutex<FetchResult<Vec<PricePoint>>>,
    market_calls: AtomicUsize,
    /// Every (currency, per_page) seen by `list_markets`.
    market_args: Mutex<Vec<(Currency, u32)>>,
    /// Every coin id seen by `price_history`.
    history_ids: Mutex<Vec<String>>,
}

impl MockProvider {
    pub(crate) fn new() -> Self {
        let coins = (1..=30)
            .map(|rank| {
                sample_coin(
                    &format!("coin-{rank}"),
                    &format!("Coin {rank}"),
                    &format!("c{rank}"),
                    rank,
                )
            })
            .collect();
        let history = (0..24)
            .map(|h| PricePoint {
                timestamp_ms: 1_704_067_200_000 + h * 3_600_000,
                price: 100.0 + h as f64,
            })
            .collect();
        Self {
            markets: Mutex::new(Ok(coins)),
            failing_page_size: Mutex::new(None),
            history: Mutex::new(Ok(history)),
            market_calls: AtomicUsize::new(0),
            market_args: Mutex::new(Vec::new()),
            history_ids: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn fail_markets(&self, message: &str) {
        *self.markets.lock().unwrap() = Err(FetchError::Status {
            status: 500,
            message: message.to_string(),
        });
    }

    /// Fails only listings asking for `per_page` coins.
    pub(crate) fn fail_markets_with(&self, per_page: u32) {
        *self.failing_page_size.lock().unwrap() = Some(per_page);
    }

    pub(crate) fn market_calls(&self) -> usize {
        self.market_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn history_ids(&self) -> Vec<String> {
        self.history_ids.lock().unwrap().clone()
    }

    pub(crate) fn market_calls_with(&self, per_page: u32) -> usize {
        self.market_args
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, n)| *n == per_page)
            .count()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for MockProvider {
    async fn list_markets(
        &self,
        currency: Currency,
        _page: u32,
        per_page: u32,
    ) -> FetchResult<Vec<Coin>> {
        self.market_calls.fetch_add(1, Ordering::SeqCst);
        self.market_args.lock().unwrap().push((currency, per_page));
        if *self.failing_page_size.lock().unwrap() == Some(per_page) {
            return Err(FetchError::Status {
                status: 429,
                message: "You've exceeded the Rate Limit.".to_string(),
            });
        }
        self.markets
            .lock()
            .unwrap()
            .clone()
            .map(|coins| coins.into_iter().take(per_page as usize).collect())
    }

    async fn price_history(
        &self,
        coin_id: &str,
        _days: ChartDays,
        _currency: Currency,
    ) -> FetchResult<Vec<PricePoint>> {
        self.history_ids.lock().unwrap().push(coin_id.to_string());
        // Long enough for a test to observe Loading first.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        self.history.lock().unwrap().clone()
    }
}
