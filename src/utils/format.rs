//! Currency-aware number formatting.
//!
//! Views only talk to [`MoneyFormat`], so a target with different conventions can
//! swap the implementation without touching the catalog or chart code.

use crate::domain::{Currency, Locale};

/// Renders amounts denominated in one currency.
pub trait MoneyFormat {
    /// Table/ticker price: 2 decimals, or up to 6 below 1.
    fn price(&self, value: f64) -> String;
    /// Headline price on the detail panel: 2 decimals, or up to 8 below 1.
    fn precise_price(&self, value: f64) -> String;
    /// Symbol plus a grouped number with up to 3 decimals.
    fn plain(&self, value: f64) -> String;
    /// Market cap / volume style: `$1.2B`, `₹25L`.
    fn compact(&self, value: f64) -> String;
    /// Chart y-axis tick: currency symbol, US-style short scale.
    fn axis(&self, value: f64) -> String;
}

/// Signed percentage with two decimals, e.g. `-1.23%`.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Formats using the currency's own symbol and digit grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    currency: Currency,
}

impl LocaleFormat {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    fn money(&self, value: f64, body: String) -> String {
        format!("{}{}{}", sign(value, &body), self.currency.symbol(), body)
    }
}

impl MoneyFormat for LocaleFormat {
    fn price(&self, value: f64) -> String {
        let max_frac = if value.abs() < 1.0 { 6 } else { 2 };
        let body = format_decimal(value, 2, max_frac, self.currency.locale());
        self.money(value, body)
    }

    fn precise_price(&self, value: f64) -> String {
        let max_frac = if value.abs() < 1.0 { 8 } else { 2 };
        let body = format_decimal(value, 2, max_frac, self.currency.locale());
        self.money(value, body)
    }

    fn plain(&self, value: f64) -> String {
        let body = format_decimal(value, 0, 3, self.currency.locale());
        self.money(value, body)
    }

    fn compact(&self, value: f64) -> String {
        let body = compact_number(value, self.currency.locale());
        self.money(value, body)
    }

    fn axis(&self, value: f64) -> String {
        let body = compact_number(value, Locale::EnUs);
        self.money(value, body)
    }
}

fn sign(value: f64, body: &str) -> &'static str {
    let nonzero = body.chars().any(|c| c.is_ascii_digit() && c != '0');
    if value < 0.0 && nonzero { "-" } else { "" }
}

/// Unsigned, grouped, rounded to `max_frac` then trimmed back to no fewer than `min_frac` decimals.
fn format_decimal(value: f64, min_frac: usize, max_frac: usize, locale: Locale) -> String {
    let fixed = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < min_frac {
        frac.push('0');
    }
    let grouped = group_digits(int_part, locale);
    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}

fn group_digits(digits: &str, locale: Locale) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let size = match locale {
        Locale::EnUs => 3,
        Locale::EnIn => 2,
    };
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

fn compact_units(locale: Locale) -> &'static [(f64, &'static str)] {
    match locale {
        Locale::EnUs => &[(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")],
        Locale::EnIn => &[(1e7, "Cr"), (1e5, "L"), (1e3, "K")],
    }
}

// Two significant digits below 10, whole numbers above.
fn compact_decimals(x: f64) -> usize {
    if x == 0.0 || x >= 10.0 {
        0
    } else if x >= 1.0 {
        1
    } else {
        ((-x.log10()).floor() as usize) + 2
    }
}

fn round_to(x: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (x * factor).round() / factor
}

// Rounds half away from zero first; `{:.N}` alone would send 1.25 to 1.2.
fn compact_digits(x: f64, locale: Locale) -> String {
    let decimals = compact_decimals(x);
    format_decimal(round_to(x, decimals), 0, decimals, locale)
}

fn compact_number(value: f64, locale: Locale) -> String {
    let abs = value.abs();
    let units = compact_units(locale);

    let Some(idx) = units.iter().position(|(scale, _)| abs >= *scale) else {
        // 999.7 rounds up into the first unit
        if let Some(&(scale, suffix)) = units.last() {
            if round_to(abs, compact_decimals(abs)) >= scale {
                return format!("{}{}", compact_digits(abs / scale, locale), suffix);
            }
        }
        return compact_digits(abs, locale);
    };

    let (scale, suffix) = units[idx];
    let scaled = abs / scale;

    // 999_999 must read 1M, not 1000K
    if idx > 0 {
        let (larger, larger_suffix) = units[idx - 1];
        if round_to(scaled, compact_decimals(scaled)) * scale >= larger {
            return format!("{}{}", compact_digits(abs / larger, locale), larger_suffix);
        }
    }
    format!("{}{}", compact_digits(scaled, locale), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> LocaleFormat {
        LocaleFormat::new(Currency::Usd)
    }

    fn inr() -> LocaleFormat {
        LocaleFormat::new(Currency::Inr)
    }

    #[test]
    fn price_uses_two_decimals_above_one() {
        assert_eq!(usd().price(64_231.5), "$64,231.50");
        assert_eq!(usd().price(1.0), "$1.00");
        assert_eq!(usd().price(0.0), "$0.00");
    }

    #[test]
    fn price_keeps_precision_below_one() {
        assert_eq!(usd().price(0.5), "$0.50");
        assert_eq!(usd().price(0.000_123_45), "$0.000123");
        assert_eq!(usd().precise_price(0.123_456_789), "$0.12345679");
    }

    #[test]
    fn rupee_prices_use_lakh_grouping() {
        assert_eq!(inr().price(5_012_345.678), "₹50,12,345.68");
        assert_eq!(inr().price(999.0), "₹999.00");
        assert_eq!(inr().price(123_456_789.0), "₹12,34,56,789.00");
    }

    #[test]
    fn negative_sign_goes_before_symbol() {
        assert_eq!(usd().price(-1_500.25), "-$1,500.25");
        assert_eq!(usd().price(-0.0), "$0.00");
    }

    #[test]
    fn plain_trims_to_three_decimals() {
        assert_eq!(usd().plain(1_234.5678), "$1,234.568");
        assert_eq!(usd().plain(70_000.0), "$70,000");
        assert_eq!(inr().plain(250_000.5), "₹2,50,000.5");
    }

    #[test]
    fn compact_us_scale() {
        assert_eq!(usd().compact(1_234_567_890.0), "$1.2B");
        assert_eq!(usd().compact(12_345.0), "$12K");
        assert_eq!(usd().compact(1_300_000_000_000.0), "$1.3T");
        assert_eq!(usd().compact(999_999.0), "$1M");
        assert_eq!(usd().compact(999.7), "$1K");
        assert_eq!(usd().compact(950.0), "$950");
    }

    #[test]
    fn compact_ties_round_up() {
        assert_eq!(usd().compact(1_250_000_000.0), "$1.3B");
        assert_eq!(usd().compact(2_250_000.0), "$2.3M");
        assert_eq!(usd().compact(12_500.0), "$13K");
        assert_eq!(usd().compact(2.5), "$2.5");
        assert_eq!(inr().compact(245_000.0), "₹2.5L");
    }

    #[test]
    fn compact_indian_scale() {
        assert_eq!(inr().compact(2_500_000.0), "₹25L");
        assert_eq!(inr().compact(45_000.0), "₹45K");
        assert_eq!(inr().compact(123_456_789_000.0), "₹12,346Cr");
        assert_eq!(inr().compact(99_999.0), "₹1L");
    }

    #[test]
    fn axis_is_always_us_short_scale() {
        assert_eq!(inr().axis(5_600_000.0), "₹5.6M");
        assert_eq!(usd().axis(0.000_012_34), "$0.000012");
        assert_eq!(usd().axis(0.0), "$0");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(percent(-1.234), "-1.23%");
        assert_eq!(percent(2.0), "2.00%");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_digits("1234567", Locale::EnUs), "1,234,567");
        assert_eq!(group_digits("1234567", Locale::EnIn), "12,34,567");
        assert_eq!(group_digits("123", Locale::EnIn), "123");
    }
}
