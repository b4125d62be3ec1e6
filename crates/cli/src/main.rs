use anyhow::Result;
use clap::Parser;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();

    let cli = cli::Cli::parse();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Application error: {}", e);
            Err(e)
        }
    }
}
