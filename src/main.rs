//! PCB Point admin client
//!
//! Main application entry point

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info};

use PcbPoint::{
    config::Settings,
    handlers::{handle_command, Command},
    services::ServiceFactory,
    utils::logging,
};

#[derive(Parser, Debug)]
#[command(name = "pcbpoint", version, about = "PCB Point admin client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate().context("Invalid configuration")?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;
    debug!("{} starting", PcbPoint::info());

    let services = ServiceFactory::new(settings).context("Failed to build API client")?;

    // Pick up a saved session, dropping it if the token has expired
    if services.session.restore().await.context("Failed to read saved session")? {
        info!("Restored saved session");
    }

    match handle_command(&services, cli.command).await {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, severity = %e.severity(), "Command failed");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
