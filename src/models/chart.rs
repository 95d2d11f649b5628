use serde::{Deserialize, Serialize};

/// Raw `[timestamp_ms, price]` pair from the price-history endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub price: f64,
}

impl From<(f64, f64)> for PricePoint {
    fn from((timestamp_ms, price): (f64, f64)) -> Self {
        Self {
            timestamp_ms: timestamp_ms as i64,
            price,
        }
    }
}

impl From<PricePoint> for (f64, f64) {
    fn from(point: PricePoint) -> Self {
        (point.timestamp_ms as f64, point.price)
    }
}

/// A price ready for plotting, with its x-axis label already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub price: f64,
}
