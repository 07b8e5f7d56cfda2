//! Core conversion logic and abstractions

pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use conversion::ConversionResult;
pub use currency::{CurrencyCode, CurrencySet};
pub use error::{ConvertError, ErrorKind};
pub use rates::{ExchangeRateProvider, RateMap, RateResult};
