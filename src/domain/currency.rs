use {
    clap::ValueEnum,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Number grouping conventions used when rendering amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// `1,234,567.89`
    EnUs,
    /// `12,34,567.89` (lakh/crore grouping)
    EnIn,
}

/// Quote currency every price in the app is denominated in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    ValueEnum,
    Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    #[strum(to_string = "USD")]
    Usd,
    #[strum(to_string = "INR")]
    Inr,
    #[strum(to_string = "EUR")]
    Eur,
}

impl Currency {
    /// The `vs_currency` value the market API expects.
    pub fn api_code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Inr => "inr",
            Currency::Eur => "eur",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
            Currency::Eur => "€",
        }
    }

    pub fn locale(&self) -> Locale {
        match self {
            Currency::Inr => Locale::EnIn,
            Currency::Usd | Currency::Eur => Locale::EnUs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn api_codes_are_lowercase_display_names() {
        for currency in Currency::iter() {
            assert_eq!(currency.api_code(), currency.to_string().to_lowercase());
        }
    }

    #[test]
    fn only_rupee_uses_indian_grouping() {
        assert_eq!(Currency::Inr.locale(), Locale::EnIn);
        assert_eq!(Currency::Usd.locale(), Locale::EnUs);
        assert_eq!(Currency::Eur.locale(), Locale::EnUs);
    }

    #[test]
    fn serde_uses_api_codes() {
        let json = serde_json::to_string(&Currency::Inr).unwrap();
        assert_eq!(json, "\"inr\"");
        let back: Currency = serde_json::from_str("\"usd\"").unwrap();
        assert_eq!(back, Currency::Usd);
    }
}
