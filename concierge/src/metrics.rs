//! Best-effort Prometheus metrics on the default registry.
//!
//! Registration failures leave the metric unset; recording then does
//! nothing, so callers never observe a metrics failure.

use std::sync::LazyLock;

use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};
use tracing::debug;

use crate::error::ApiError;

static SEARCH_RESULTS: LazyLock<Option<Histogram>> = LazyLock::new(|| {
    register_histogram!(
        "concierge_search_results",
        "Number of results returned by the search provider per query",
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]
    )
    .map_err(|e| debug!("search results histogram unavailable: {}", e))
    .ok()
});

static SEARCH_REQUESTS: LazyLock<Option<IntCounterVec>> = LazyLock::new(|| {
    register_int_counter_vec!(
        "concierge_search_requests_total",
        "Search provider calls by outcome",
        &["outcome"]
    )
    .map_err(|e| debug!("search requests counter unavailable: {}", e))
    .ok()
});

static PLANS: LazyLock<Option<IntCounter>> = LazyLock::new(|| {
    register_int_counter!("concierge_plans_total", "Travel plans generated")
        .map_err(|e| debug!("plans counter unavailable: {}", e))
        .ok()
});

pub fn record_search_results(count: usize) {
    if let Some(histogram) = SEARCH_RESULTS.as_ref() {
        histogram.observe(count as f64);
    }
}

pub fn record_search_outcome(outcome: &str) {
    if let Some(counter) = SEARCH_REQUESTS.as_ref() {
        counter.with_label_values(&[outcome]).inc();
    }
}

pub fn record_plan() {
    if let Some(counter) = PLANS.as_ref() {
        counter.inc();
    }
}

/// Renders the default registry in the text exposition format.
pub fn render() -> Result<(Vec<u8>, String), ApiError> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::MetricsError(e.to_string()))?;
    Ok((buffer, encoder.format_type().to_string()))
}
