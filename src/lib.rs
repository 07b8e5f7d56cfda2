pub mod cli;
pub mod core;
pub mod form;
pub mod providers;

use crate::core::config::{AppConfig, StartupConfig};
use crate::form::ConversionForm;
use crate::providers::FreeCurrencyClient;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Form,
    Convert {
        amount: String,
        base: Option<String>,
        api_key: Option<String>,
    },
    Currencies,
}

/// Runs `command` with the config at `config_path` (or the default location)
/// and `default_api_key` pre-filled in the form.
pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    default_api_key: Option<String>,
) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let startup = StartupConfig::new(&config, default_api_key)?;
    let client = FreeCurrencyClient::new(&startup.base_url, startup.currencies.clone());
    let mut form = ConversionForm::new(&startup, client);

    match command {
        AppCommand::Form => cli::form::run(&mut form).await,
        AppCommand::Convert {
            amount,
            base,
            api_key,
        } => cli::convert::run(&mut form, &amount, base.as_deref(), api_key.as_deref()).await,
        AppCommand::Currencies => {
            cli::currencies::run(form.currencies());
            Ok(())
        }
    }
}
