mod coingecko;
mod error;
mod fetch;
#[cfg(test)]
mod mock;
mod provider;

pub use {
    coingecko::CoinGeckoProvider,
    error::{FetchError, FetchResult, error_message_from_body},
    fetch::{FetchState, Subscription, TaskHandle, TaskSpawner},
    provider::{MarketDataProvider, MaybeSend, MaybeSync},
};

#[cfg(test)]
pub(crate) use {fetch::test_support::settle, mock::MockProvider};
