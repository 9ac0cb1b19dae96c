use clap::Parser;
use tracing::{error, info};
use user_registry::{setup_tracing, ServerConfig, ServerSystem};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ServerConfig::parse();
    info!(listen = %config.listen, "Starting user registry server");

    let system = match ServerSystem::start(config.listen, true).await {
        Ok(system) => system,
        Err(e) => {
            error!(error = %e, "Failed to start");
            return Err(e.into());
        }
    };

    system
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
        })
        .await?;

    info!("Server stopped");
    Ok(())
}
