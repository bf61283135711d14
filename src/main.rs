use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rebate::config::{LoggingConfig, QuoteConfig, ServerConfig};
use rebate::server::DiscountResponse;
use rebate::{RebateError, RuleStore};
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "rebate")]
#[command(about = "Best-discount selection service", long_about = None)]
struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve `POST /discount` over HTTP
    Serve(ServerConfig),

    /// Price a single order and print the result as JSON
    Quote(QuoteConfig),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = rebate::logging::init(&cli.logging) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Command::Serve(config) => rebate::server::serve(config).await,
        Command::Quote(config) => quote(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "rebate failed");
            ExitCode::FAILURE
        }
    }
}

fn quote(config: &QuoteConfig) -> Result<(), RebateError> {
    let store = RuleStore::new();
    store.load(&config.rules.rules)?;

    let json = if config.explain {
        let report = store.select_best_discount_detailed(config.amount, &config.customer_type);
        serde_json::to_string_pretty(&report)?
    } else {
        let outcome = store.select_best_discount(config.amount, &config.customer_type);
        serde_json::to_string_pretty(&DiscountResponse::from(outcome))?
    };
    println!("{json}");
    Ok(())
}
