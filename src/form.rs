//! The conversion form: field state, validation and result rendering.
//!
//! A submission runs through validation, the rate lookup and rendering in
//! one call to [`ConversionForm::submit`]. Validation failures never reach
//! the provider. Rendering is a pure function of the parsed amount and the
//! provider's answer, see [`render`].

use std::fmt::Display;
use tracing::debug;

use crate::core::config::StartupConfig;
use crate::core::conversion::{ConversionResult, parse_amount};
use crate::core::currency::{CurrencyCode, CurrencySet};
use crate::core::error::ConvertError;
use crate::core::rates::{ExchangeRateProvider, RateResult};

pub const MSG_API_KEY_REQUIRED: &str = "API Key is required.\nPlease enter it.";
pub const MSG_SELECT_BASE: &str = "Please select a base currency.";
pub const MSG_ENTER_AMOUNT: &str = "Please enter an amount to convert.";
pub const MSG_INVALID_AMOUNT: &str = "Invalid amount. Please enter a number.";
pub const MSG_NO_RATES: &str = "Could not retrieve exchange rates.";

/// What the results area shows after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Converted(ConversionResult),
    RatesUnavailable,
    Failed(ConvertError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Converted(_))
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Converted(result) => write!(f, "{result}"),
            Outcome::RatesUnavailable => f.write_str(MSG_NO_RATES),
            Outcome::Failed(ConvertError::Unexpected(detail)) => {
                write!(f, "An unexpected error occurred: {detail}")
            }
            Outcome::Failed(err) => write!(f, "{err}"),
        }
    }
}

/// Maps a provider answer to what the form displays.
pub fn render(amount: f64, result: RateResult) -> Outcome {
    match result {
        Ok(Some(rates)) if !rates.is_empty() => {
            Outcome::Converted(ConversionResult::from_rates(amount, &rates))
        }
        Ok(_) => Outcome::RatesUnavailable,
        Err(err) => Outcome::Failed(err),
    }
}

/// Validated inputs of one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub api_key: String,
    pub base_currency: CurrencyCode,
    pub amount: f64,
}

pub struct ConversionForm<P> {
    provider: P,
    currencies: CurrencySet,
    api_key: String,
    amount: String,
    base_currency: Option<CurrencyCode>,
    key_masked: bool,
    outcome: Option<Outcome>,
}

impl<P: ExchangeRateProvider> ConversionForm<P> {
    pub fn new(startup: &StartupConfig, provider: P) -> Self {
        ConversionForm {
            provider,
            currencies: startup.currencies.clone(),
            api_key: startup.default_api_key.clone().unwrap_or_default(),
            amount: String::new(),
            base_currency: Some(startup.currencies.first().clone()),
            key_masked: true,
            outcome: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn currencies(&self) -> &CurrencySet {
        &self.currencies
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn set_api_key(&mut self, api_key: &str) {
        self.api_key = api_key.trim().to_string();
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.to_string();
    }

    pub fn base_currency(&self) -> Option<&CurrencyCode> {
        self.base_currency.as_ref()
    }

    /// Selects a base currency from the configured set. Anything outside the
    /// set is rejected and the current selection is kept.
    pub fn select_base_currency(&mut self, code: &CurrencyCode) -> Result<(), ConvertError> {
        if !self.currencies.contains(code) {
            return Err(ConvertError::Validation(format!(
                "{code} is not one of the available currencies."
            )));
        }
        self.base_currency = Some(code.clone());
        Ok(())
    }

    pub fn clear_base_currency(&mut self) {
        self.base_currency = None;
    }

    pub fn is_key_masked(&self) -> bool {
        self.key_masked
    }

    pub fn toggle_key_visibility(&mut self) {
        self.key_masked = !self.key_masked;
    }

    /// Label of the visibility toggle for the current state.
    pub fn toggle_label(&self) -> &'static str {
        if self.key_masked { "Show" } else { "Hide" }
    }

    /// The API key as the field shows it.
    pub fn displayed_api_key(&self) -> String {
        if self.key_masked {
            "*".repeat(self.api_key.chars().count())
        } else {
            self.api_key.clone()
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Text of the results area; empty before the first submission.
    pub fn result_text(&self) -> String {
        self.outcome
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Checks the fields in display order and stops at the first problem.
    pub fn validate(&self) -> Result<Submission, ConvertError> {
        if self.api_key.is_empty() {
            return Err(ConvertError::Configuration(MSG_API_KEY_REQUIRED.to_string()));
        }
        let base_currency = self
            .base_currency
            .clone()
            .ok_or_else(|| ConvertError::Validation(MSG_SELECT_BASE.to_string()))?;
        if self.amount.trim().is_empty() {
            return Err(ConvertError::Validation(MSG_ENTER_AMOUNT.to_string()));
        }
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| ConvertError::Validation(MSG_INVALID_AMOUNT.to_string()))?;

        Ok(Submission {
            api_key: self.api_key.clone(),
            base_currency,
            amount,
        })
    }

    /// Runs one submission and stores its outcome in the results area.
    pub async fn submit(&mut self) -> &Outcome {
        let outcome = match self.validate() {
            Ok(submission) => {
                debug!(
                    base_currency = %submission.base_currency,
                    amount = submission.amount,
                    "Submitting conversion"
                );
                self.provider.set_api_key(&submission.api_key);
                let result = self
                    .provider
                    .get_exchange_rates(&submission.base_currency)
                    .await;
                render(submission.amount, result)
            }
            Err(err) => {
                debug!(error = %err, "Form validation failed");
                Outcome::Failed(err)
            }
        };
        self.outcome.insert(outcome)
    }
}
