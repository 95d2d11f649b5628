use {
    serde::{Deserialize, Serialize},
    std::fmt,
    strum_macros::{Display, EnumIter},
};

/// The `days` argument of a price-history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartDays {
    /// A positive number of days back from now.
    Days(u32),
    /// Everything since the coin was listed.
    Max,
}

impl ChartDays {
    /// True when the span covers at most `days` days.
    pub fn at_most(&self, days: u32) -> bool {
        match self {
            ChartDays::Days(n) => *n <= days,
            ChartDays::Max => false,
        }
    }
}

impl fmt::Display for ChartDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartDays::Days(n) => write!(f, "{}", n),
            ChartDays::Max => write!(f, "max"),
        }
    }
}

/// Range buttons offered above the price chart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum TimeRange {
    #[default]
    #[strum(to_string = "24H")]
    Day,
    #[strum(to_string = "7D")]
    Week,
    #[strum(to_string = "30D")]
    Month,
    #[strum(to_string = "90D")]
    Quarter,
    #[strum(to_string = "1Y")]
    Year,
    #[strum(to_string = "MAX")]
    Max,
}

impl TimeRange {
    pub fn days(&self) -> ChartDays {
        match self {
            TimeRange::Day => ChartDays::Days(1),
            TimeRange::Week => ChartDays::Days(7),
            TimeRange::Month => ChartDays::Days(30),
            TimeRange::Quarter => ChartDays::Days(90),
            TimeRange::Year => ChartDays::Days(365),
            TimeRange::Max => ChartDays::Max,
        }
    }
}
