use warp::{Rejection, Reply};

use crate::metrics;

pub const SERVICE_NAME: &str = "AI Concierge Agent";

pub fn root(tracing_enabled: bool) -> warp::reply::Json {
    warp::reply::json(&serde_json::json!({
        "status": "running",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "tracing_enabled": tracing_enabled,
    }))
}

pub fn health() -> warp::reply::Json {
    warp::reply::json(&serde_json::json!({"status": "healthy"}))
}

pub async fn handle_metrics() -> Result<impl Reply, Rejection> {
    let (buffer, content_type) = metrics::render().map_err(warp::reject::custom)?;
    Ok(warp::reply::with_header(buffer, "Content-Type", content_type))
}
