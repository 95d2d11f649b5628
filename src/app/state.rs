// src/app/state.rs

use crate::config::DF;
use crate::domain::Currency;
use crate::models::Coin;

/// Global UI state shared by every view: the quote currency and the coin being inspected.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AppState {
    pub(crate) currency: Currency,
    pub(crate) selected: Option<Coin>,
}

impl AppState {
    pub(crate) fn new(currency: Currency) -> Self {
        Self {
            currency,
            selected: None,
        }
    }

    /// Returns true if the currency actually changed.
    pub(crate) fn set_currency(&mut self, currency: Currency) -> bool {
        if currency == self.currency {
            return false;
        }
        #[cfg(debug_assertions)]
        if DF.log_currency {
            log::info!("Currency {} -> {}", self.currency, currency);
        }
        self.currency = currency;
        true
    }

    pub(crate) fn select(&mut self, coin: Coin, _reason: &str) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("SELECTION SET to {} because {}", coin.id, _reason);
        }
        self.selected = Some(coin);
    }

    pub(crate) fn clear_selection(&mut self) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            if let Some(coin) = &self.selected {
                log::info!("SELECTION CLEARED (was {})", coin.id);
            }
        }
        self.selected = None;
    }
}
