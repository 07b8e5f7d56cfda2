use anyhow::Result;
use clap::{Parser, Subcommand};
use fxconv::core::config::API_KEY_ENV;
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Form => fxconv::AppCommand::Form,
            Commands::Convert {
                amount,
                base,
                api_key,
            } => fxconv::AppCommand::Convert {
                amount,
                base,
                api_key,
            },
            Commands::Currencies => fxconv::AppCommand::Currencies,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Open the interactive conversion form (default)
    Form,
    /// Convert an amount once and print the results
    Convert {
        /// Amount to convert
        #[arg(short, long, allow_negative_numbers = true)]
        amount: String,
        /// Base currency, defaults to the first configured currency
        #[arg(short, long)]
        base: Option<String>,
        /// API key, overrides the API_KEY_CURRENCIES environment variable
        #[arg(short = 'k', long)]
        api_key: Option<String>,
    },
    /// List the configured target currencies
    Currencies,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let default_api_key = std::env::var(API_KEY_ENV).ok();
    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup(),
        Some(cmd) => {
            fxconv::run_command(cmd.into(), cli.config_path.as_deref(), default_api_key).await
        }
        None => {
            fxconv::run_command(
                fxconv::AppCommand::Form,
                cli.config_path.as_deref(),
                default_api_key,
            )
            .await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
