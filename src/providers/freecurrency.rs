use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::core::currency::{CurrencyCode, CurrencySet};
use crate::core::error::ConvertError;
use crate::core::rates::{ExchangeRateProvider, RateMap, RateResult};

/// Client for the freecurrencyapi.com `latest` endpoint.
pub struct FreeCurrencyClient {
    base_url: String,
    api_key: String,
    currencies: CurrencySet,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    data: Option<RateMap>,
}

impl FreeCurrencyClient {
    pub fn new(base_url: &str, currencies: CurrencySet) -> Self {
        FreeCurrencyClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: String::new(),
            currencies,
        }
    }

    #[cfg(test)]
    fn with_api_key(mut self, api_key: &str) -> Self {
        self.set_api_key(api_key);
        self
    }

    fn latest_url(&self, base_currency: &CurrencyCode) -> Result<Url, ConvertError> {
        let endpoint = format!("{}/v1/latest", self.base_url);
        Url::parse_with_params(
            &endpoint,
            &[
                ("apikey", self.api_key.as_str()),
                ("base_currency", base_currency.as_str()),
                ("currencies", self.currencies.joined().as_str()),
            ],
        )
        .map_err(|e| ConvertError::Unexpected(format!("Invalid provider URL {endpoint}: {e}")))
    }
}

#[async_trait]
impl ExchangeRateProvider for FreeCurrencyClient {
    fn set_api_key(&mut self, api_key: &str) {
        self.api_key = api_key.to_string();
    }

    async fn get_exchange_rates(&self, base_currency: &CurrencyCode) -> RateResult {
        if self.api_key.is_empty() {
            return Err(ConvertError::Configuration(
                "API Key is required.".to_string(),
            ));
        }

        let url = self.latest_url(base_currency)?;
        debug!(
            base_url = %self.base_url,
            %base_currency,
            currencies = %self.currencies.joined(),
            "Requesting latest exchange rates"
        );

        let client = reqwest::Client::builder().user_agent("fxconv/1.0").build()?;
        let response = client.get(url).send().await?;

        let status = response.status();
        debug!(%status, "Received provider response");
        if !status.is_success() {
            return Err(ConvertError::Transport(format!("HTTP error: {status}")));
        }

        let text = response.text().await?;
        let body: LatestResponse = serde_json::from_str(&text)?;

        match body.data {
            Some(rates) if !rates.is_empty() => Ok(Some(rates)),
            _ => {
                debug!("Provider returned no rates");
                Ok(None)
            }
        }
    }
}
