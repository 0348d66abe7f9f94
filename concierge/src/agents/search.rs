// Search Gateway: single Tavily call with an empty-on-failure contract

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::metrics;
use crate::middleware::OperationTracer;
use crate::models::SearchResult;

pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Clone)]
pub struct SearchGateway {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    tracer: OperationTracer,
}

impl SearchGateway {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_key: config.tavily_api_key.clone(),
            base_url: config.tavily_base_url.trim_end_matches('/').to_string(),
            tracer: OperationTracer::new(config.tracing_enabled),
        }
    }

    /// Returns up to [`MAX_RESULTS`] records, or none at all when the
    /// provider is unconfigured or the call fails in any way.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("TAVILY_API_KEY not set, skipping search: {}", query);
            metrics::record_search_outcome("skipped");
            return Vec::new();
        };

        match self.tracer.run_fallible("tavily_search", self.fetch(api_key, query)).await {
            Ok(results) => {
                debug!("Search returned {} results for: {}", results.len(), query);
                metrics::record_search_outcome("ok");
                metrics::record_search_results(results.len());
                results
            }
            Err(e) => {
                warn!("Tavily search error: {}", e);
                metrics::record_search_outcome("error");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, api_key: &str, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        let url = format!("{}/search", self.base_url);
        let payload = TavilyRequest {
            api_key,
            query,
            max_results: MAX_RESULTS,
        };

        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UpstreamStatus { status: status.as_u16(), body });
        }

        let body = response.bytes().await?;
        let parsed: TavilyResponse = serde_json::from_slice(&body)?;

        Ok(parsed.results.into_iter().take(MAX_RESULTS).collect())
    }
}
