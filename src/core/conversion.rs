//! Amount parsing and rate multiplication

use std::fmt::Display;

use super::currency::CurrencyCode;
use super::rates::RateMap;

/// Parses user-entered amount text. Surrounding whitespace is ignored and
/// non-finite values (`inf`, `NaN`) are rejected.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Converted amounts, one per quoted currency.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub amounts: Vec<(CurrencyCode, f64)>,
}

impl ConversionResult {
    pub fn from_rates(amount: f64, rates: &RateMap) -> Self {
        let amounts = rates
            .iter()
            .map(|(code, rate)| (code.clone(), amount * rate))
            .collect();
        ConversionResult { amounts }
    }
}

impl Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .amounts
            .iter()
            .map(|(code, value)| format!("{code}: {value:.2}"))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}
