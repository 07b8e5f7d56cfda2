//! Exchange rate lookup abstractions

use async_trait::async_trait;
use indexmap::IndexMap;

use super::currency::CurrencyCode;
use super::error::ConvertError;

/// Rates relative to a base currency, in the order the provider returned them.
pub type RateMap = IndexMap<CurrencyCode, f64>;

/// Outcome of a lookup: `Ok(None)` means the provider answered but had no rates.
pub type RateResult = Result<Option<RateMap>, ConvertError>;

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Replaces the stored API key. Presence is only checked at lookup time.
    fn set_api_key(&mut self, api_key: &str);

    async fn get_exchange_rates(&self, base_currency: &CurrencyCode) -> RateResult;
}
