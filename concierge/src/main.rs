use warp::Filter;
use tracing::info;

use concierge::{api, build_services, config, error, middleware};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level))
        )
        .json()
        .init();

    info!("Starting AI Concierge Agent");
    info!(
        "Configuration loaded: search={}, chat={}, tracing={}",
        config.tavily_api_key.is_some(),
        config.openai_api_key.is_some(),
        config.tracing_enabled
    );

    let services = build_services(&config)?;

    let routes = api::routes(services)
        .recover(error::handle_rejection)
        .with(warp::log("concierge"))
        .with(middleware::cors(&config.allowed_origins));

    // Start server
    let addr = ([0, 0, 0, 0], config.port);
    let (bound, server) = warp::serve(routes).try_bind_with_graceful_shutdown(addr, async {
        tokio::signal::ctrl_c().await.ok();
        info!("Shutdown signal received");
    })?;
    info!("Server listening on {}", bound);

    server.await;

    Ok(())
}
