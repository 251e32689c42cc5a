mod cli;

use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands, PayArgs};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use upilink::bridge::UpiBridge;
use upilink::config::Config;
use upilink::intent::launcher::CommandLauncher;
use upilink::intent::uri::payment_uri;
use upilink::observability::Metrics;
use upilink::response::{ActivityResult, resolve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Pay(args) => pay(config, args).await?,
        Commands::Uri(args) => {
            let uri = payment_uri(&args.to_request(), &config.payment.default_currency)?;
            println!("{uri}");
        }
        Commands::Classify(args) => {
            let outcome = resolve(args.to_activity_result());
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}

async fn pay(config: Config, args: PayArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let wait = args.wait;
    let timeout = config.payment.response_timeout();

    let launcher = Arc::new(CommandLauncher::new(config.launcher));
    let bridge = UpiBridge::new(config.payment, launcher, Arc::new(Metrics::new()));

    let pending = bridge.start_payment(args.to_request()).await?;
    info!(uri = %pending.uri, reference = %pending.reference, "Awaiting handler response");

    if wait {
        // One line on stdin stands in for the platform callback: the raw
        // response blob as the handler application returned it.
        let mut line = String::new();
        BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;

        let result = ActivityResult {
            response: line.trim().to_string(),
            result_code: 1,
            ..Default::default()
        };
        bridge.complete(result).await;

        let outcome = pending.outcome_timeout(timeout).await?;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
