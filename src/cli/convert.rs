use super::ui;
use crate::core::currency::CurrencyCode;
use crate::core::rates::ExchangeRateProvider;
use crate::form::ConversionForm;
use anyhow::{Result, anyhow};

/// Fills the form from command line values and submits it once.
pub async fn run<P: ExchangeRateProvider>(
    form: &mut ConversionForm<P>,
    amount: &str,
    base: Option<&str>,
    api_key: Option<&str>,
) -> Result<()> {
    if let Some(key) = api_key {
        form.set_api_key(key);
    }
    if let Some(base) = base {
        let code: CurrencyCode = base.parse()?;
        form.select_base_currency(&code)?;
    }
    form.set_amount(amount);

    let pb = ui::new_spinner("Fetching exchange rates...");
    let outcome = form.submit().await.clone();
    pb.finish_and_clear();

    if !outcome.is_success() {
        return Err(anyhow!("{outcome}"));
    }
    println!("{outcome}");
    Ok(())
}
