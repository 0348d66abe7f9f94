use std::sync::Arc;
use std::time::Duration;

use agents::chat::ChatAgent;
use agents::finder::FinderAgent;
use agents::planner::PlannerAgent;
use agents::search::SearchGateway;
use agents::weather::WeatherAgent;
use api::Services;
use config::Config;
use middleware::OperationTracer;

pub mod agents;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod models;

/// Wires the agents together from configuration.
pub fn build_services(config: &Config) -> anyhow::Result<Services> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;
    let tracer = OperationTracer::new(config.tracing_enabled);

    let search = SearchGateway::new(client.clone(), config);
    let weather = WeatherAgent::new(search.clone(), tracer);
    let finder = FinderAgent::new(search, tracer);
    let planner = PlannerAgent::new(weather.clone(), finder, tracer, config.max_trip_days);
    let chat = ChatAgent::new(client, config);

    Ok(Services {
        planner: Arc::new(planner),
        chat: Arc::new(chat),
        weather: Arc::new(weather),
        tracing_enabled: config.tracing_enabled,
    })
}
