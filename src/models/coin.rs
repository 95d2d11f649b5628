use serde::{Deserialize, Deserializer, Serialize};

/// One coin's market snapshot, exactly as the provider reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Remote logo URL.
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub current_price: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub market_cap: f64,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_volume: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub high_24h: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub low_24h: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price_change_percentage_24h: f64,
}

/// Binary direction used for green/red colouring and arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Coin {
    /// Flat (0.0) counts as up.
    pub fn trend(&self) -> Trend {
        if self.price_change_percentage_24h >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn ticker(&self) -> String {
        self.symbol.to_uppercase()
    }

    pub fn rank_label(&self) -> String {
        match self.market_cap_rank {
            Some(rank) => rank.to_string(),
            None => "-".to_string(),
        }
    }
}

// Freshly listed coins come back with `null` for most numeric fields.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) fn sample_coin(id: &str, name: &str, symbol: &str, rank: u32) -> Coin {
    Coin {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        image: format!("https://assets.example/{}.png", id),
        current_price: 100.0 * rank as f64,
        market_cap: 1_000_000.0 / rank as f64,
        market_cap_rank: Some(rank),
        total_volume: 50_000.0,
        high_24h: 110.0 * rank as f64,
        low_24h: 90.0 * rank as f64,
        price_change_percentage_24h: if rank % 2 == 0 { -1.5 } else { 2.25 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_market_row_with_nulls() {
        let json = r#"{
            "id": "fresh-coin",
            "symbol": "frsh",
            "name": "Fresh Coin",
            "image": "https://assets.example/fresh.png",
            "current_price": 0.0042,
            "market_cap": null,
            "market_cap_rank": null,
            "total_volume": 1200.5,
            "high_24h": null,
            "low_24h": null,
            "price_change_percentage_24h": null,
            "ath": 0.01
        }"#;
        let coin: Coin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.id, "fresh-coin");
        assert_eq!(coin.current_price, 0.0042);
        assert_eq!(coin.market_cap, 0.0);
        assert_eq!(coin.market_cap_rank, None);
        assert_eq!(coin.rank_label(), "-");
        assert_eq!(coin.trend(), Trend::Up);
    }

    #[test]
    fn negative_change_is_down() {
        let mut coin = sample_coin("bitcoin", "Bitcoin", "btc", 1);
        coin.price_change_percentage_24h = -0.01;
        assert_eq!(coin.trend(), Trend::Down);
        coin.price_change_percentage_24h = 0.0;
        assert_eq!(coin.trend(), Trend::Up);
    }

    #[test]
    fn ticker_is_uppercased_symbol() {
        let coin = sample_coin("ethereum", "Ethereum", "eth", 2);
        assert_eq!(coin.ticker(), "ETH");
        assert_eq!(coin.rank_label(), "2");
    }
}
