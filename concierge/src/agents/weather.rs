// Weather Agent: heuristic forecast summary scraped from search results

use crate::agents::search::SearchGateway;
use crate::agents::truncate_chars;
use crate::middleware::OperationTracer;
use crate::models::{SearchResult, WeatherForecast};

pub const DEFAULT_SUMMARY: &str = "Pleasant weather expected";
pub const UNAVAILABLE_SUMMARY: &str = "Weather information unavailable";
pub const PLACEHOLDER_CONDITION: &str = "partly cloudy";
pub const PLACEHOLDER_TEMPERATURE: &str = "70°F";

const SUMMARY_CHARS: usize = 200;

pub fn weather_query(location: &str, date: &str) -> String {
    format!("weather forecast {} {}", location, date)
}

/// Only the first result is looked at.
pub fn summarize_weather(location: &str, date: &str, results: &[SearchResult]) -> WeatherForecast {
    let summary = match results.first() {
        None => DEFAULT_SUMMARY.to_string(),
        Some(first) => match first.content.as_deref() {
            Some(content) if !content.is_empty() => truncate_chars(content, SUMMARY_CHARS),
            _ => UNAVAILABLE_SUMMARY.to_string(),
        },
    };

    WeatherForecast {
        location: location.to_string(),
        date: date.to_string(),
        condition: PLACEHOLDER_CONDITION.to_string(),
        temperature: PLACEHOLDER_TEMPERATURE.to_string(),
        summary,
    }
}

#[derive(Clone)]
pub struct WeatherAgent {
    search: SearchGateway,
    tracer: OperationTracer,
}

impl WeatherAgent {
    pub fn new(search: SearchGateway, tracer: OperationTracer) -> Self {
        Self { search, tracer }
    }

    pub async fn forecast(&self, location: &str, date: &str) -> WeatherForecast {
        self.tracer
            .run("get_weather_info", async {
                let results = self.search.search(&weather_query(location, date)).await;
                summarize_weather(location, date, &results)
            })
            .await
    }
}
