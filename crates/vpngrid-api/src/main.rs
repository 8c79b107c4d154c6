//! Binary entrypoint for the VPNGRID API server.
use vpngrid_api::{run, ApiConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // VPNGRID_CONFIG names the config file; VPNGRID_ADDR overrides the listen address
    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
