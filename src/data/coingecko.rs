//! CoinGecko v3 REST client.

use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};

use crate::config::{DF, MARKET};
use crate::data::{FetchError, FetchResult, MarketDataProvider};
use crate::domain::{ChartDays, Currency};
use crate::models::{Coin, PricePoint};

#[derive(Debug, Deserialize)]
struct MarketChart {
    prices: Vec<PricePoint>,
}

#[derive(Debug, Clone)]
pub struct CoinGeckoProvider {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Client against the public endpoint.
    pub fn new() -> FetchResult<Self> {
        Self::with_base_url(MARKET.base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> FetchResult<Self> {
        let builder = reqwest::Client::builder();
        // Browsers refuse to let scripts set User-Agent.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.user_agent(MARKET.user_agent);
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn markets_url(&self, currency: Currency, page: u32, per_page: u32) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}&sparkline=false",
            self.base_url,
            currency.api_code(),
            per_page,
            page
        )
    }

    fn market_chart_url(&self, coin_id: &str, days: ChartDays, currency: Currency) -> String {
        format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            coin_id,
            currency.api_code(),
            days
        )
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        #[cfg(debug_assertions)]
        if DF.log_fetches {
            log::info!("GET {}", url);
        }

        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| FetchError::Malformed(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        let err = FetchError::from_status(status.as_u16(), &body);
        log::warn!("{} returned {}: {}", url, status, err);
        Err(err)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinGeckoProvider {
    async fn list_markets(
        &self,
        currency: Currency,
        page: u32,
        per_page: u32,
    ) -> FetchResult<Vec<Coin>> {
        if page == 0 || per_page == 0 {
            return Err(FetchError::InvalidRequest(format!(
                "page and per_page must be at least 1 (got page={}, per_page={})",
                page, per_page
            )));
        }
        self.get(&self.markets_url(currency, page, per_page)).await
    }

    async fn price_history(
        &self,
        coin_id: &str,
        days: ChartDays,
        currency: Currency,
    ) -> FetchResult<Vec<PricePoint>> {
        if coin_id.trim().is_empty() {
            return Err(FetchError::InvalidRequest("coin id is empty".to_string()));
        }
        if days == ChartDays::Days(0) {
            return Err(FetchError::InvalidRequest("days must be at least 1".to_string()));
        }
        let chart: MarketChart = self
            .get(&self.market_chart_url(coin_id, days, currency))
            .await?;
        Ok(chart.prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> CoinGeckoProvider {
        CoinGeckoProvider::with_base_url("https://example.test/api/v3/").unwrap()
    }

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(provider().base_url(), "https://example.test/api/v3");
    }

    #[test]
    fn markets_url_carries_every_query_param() {
        let url = provider().markets_url(Currency::Inr, 2, 50);
        assert_eq!(
            url,
            "https://example.test/api/v3/coins/markets?vs_currency=inr&order=market_cap_desc&per_page=50&page=2&sparkline=false"
        );
    }

    #[test]
    fn market_chart_url_uses_days_or_max() {
        let p = provider();
        assert_eq!(
            p.market_chart_url("bitcoin", ChartDays::Days(7), Currency::Usd),
            "https://example.test/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=7"
        );
        assert_eq!(
            p.market_chart_url("ethereum", ChartDays::Max, Currency::Eur),
            "https://example.test/api/v3/coins/ethereum/market_chart?vs_currency=eur&days=max"
        );
    }

    #[test]
    fn market_chart_body_decodes() {
        let body = r#"{"prices":[[1704067200000,42000.5],[1704070800000,42100.0]],"market_caps":[],"total_volumes":[]}"#;
        let chart: MarketChart = serde_json::from_str(body).unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0].timestamp_ms, 1_704_067_200_000);
        assert_eq!(chart.prices[1].price, 42100.0);
    }

    #[tokio::test]
    async fn zero_page_is_rejected_without_a_request() {
        // Unroutable base: reaching the network would yield Network, not InvalidRequest.
        let p = CoinGeckoProvider::with_base_url("http://127.0.0.1:9").unwrap();
        let err = p.list_markets(Currency::Usd, 0, 10).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest(_)));
        let err = p.list_markets(Currency::Usd, 1, 0).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest(_)));
    }
}
