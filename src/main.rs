use anyhow::Result;
use box_net_cutter::api;
use box_net_cutter::cli::{self, Cli, Command};
use box_net_cutter::config::AppConfig;
use clap::Parser;
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    cli::init_logger(args.log_level);

    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            warn!("⚠️ Could not load .env: {}", err);
        }
    }

    match args.command {
        Some(Command::Calculate(calculate_args)) => cli::run_calculate(&calculate_args),
        Some(Command::Serve) | None => {
            let app_config = AppConfig::from_env();
            info!("🚀 Box net service starting...");
            api::start_api_server(app_config.api).await?;
            Ok(())
        }
    }
}
