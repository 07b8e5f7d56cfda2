//! Currency codes and the configured target currency set

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Target currencies quoted when no configuration overrides them.
pub const DEFAULT_CURRENCIES: [&str; 13] = [
    "EUR", "USD", "GBP", "CAD", "AUD", "CNY", "JPY", "CZK", "CHF", "SEK", "TRY", "PLN", "RUB",
];

/// A three letter ISO 4217 style currency code, always stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            bail!("Invalid currency code: {s:?}");
        }
        Ok(CurrencyCode(code.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> String {
        code.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, duplicate-free list of currencies the provider is asked to quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySet {
    codes: Vec<CurrencyCode>,
}

impl CurrencySet {
    /// Builds a set from `codes`, dropping repeats and keeping first-seen order.
    pub fn new(codes: impl IntoIterator<Item = CurrencyCode>) -> Result<Self> {
        let mut unique: Vec<CurrencyCode> = Vec::new();
        for code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        if unique.is_empty() {
            bail!("Currency set must contain at least one currency");
        }
        Ok(CurrencySet { codes: unique })
    }

    pub fn codes(&self) -> &[CurrencyCode] {
        &self.codes
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.codes.contains(code)
    }

    /// The default base currency.
    pub fn first(&self) -> &CurrencyCode {
        // Construction guarantees at least one entry.
        &self.codes[0]
    }

    /// Comma-joined codes as sent in the `currencies` query parameter.
    pub fn joined(&self) -> String {
        self.codes
            .iter()
            .map(CurrencyCode::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for CurrencySet {
    fn default() -> Self {
        CurrencySet {
            codes: DEFAULT_CURRENCIES
                .iter()
                .map(|c| CurrencyCode(c.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_normalizes_codes() {
        assert_eq!(code("eur").as_str(), "EUR");
        assert_eq!(code(" jpy ").to_string(), "JPY");
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in ["", "EU", "EURO", "E1R", "€UR"] {
            assert!(bad.parse::<CurrencyCode>().is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn deserializes_from_yaml_string() {
        let codes: Vec<CurrencyCode> = serde_yaml::from_str("[usd, GBP]").unwrap();
        assert_eq!(codes, vec![code("USD"), code("GBP")]);

        let bad: Result<Vec<CurrencyCode>, _> = serde_yaml::from_str("[DOLLAR]");
        assert!(bad.is_err());
    }

    #[test]
    fn set_drops_duplicates_and_keeps_order() {
        let set = CurrencySet::new([code("USD"), code("EUR"), code("USD")]).unwrap();
        assert_eq!(set.codes(), &[code("USD"), code("EUR")]);
        assert_eq!(set.first(), &code("USD"));
        assert_eq!(set.joined(), "USD,EUR");
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(CurrencySet::new(Vec::new()).is_err());
    }

    #[test]
    fn default_set_starts_with_eur() {
        let set = CurrencySet::default();
        assert_eq!(set.codes().len(), DEFAULT_CURRENCIES.len());
        assert_eq!(set.first().as_str(), "EUR");
        assert!(set.contains(&code("RUB")));
        assert!(set.joined().starts_with("EUR,USD,GBP"));
    }
}
