#![allow(dead_code)]

use std::convert::Infallible;

use concierge::api::{self, Services};
use concierge::config::Config;
use concierge::{build_services, error};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use warp::{Filter, Reply};

pub fn config_for(search_url: Option<&str>, chat_url: Option<&str>) -> Config {
    let mut config = Config {
        http_timeout_secs: 5,
        ..Config::default()
    };
    if let Some(url) = search_url {
        config.tavily_api_key = Some("tvly-test".to_string());
        config.tavily_base_url = url.to_string();
    }
    if let Some(url) = chat_url {
        config.openai_api_key = Some("sk-test".to_string());
        config.openai_base_url = url.to_string();
    }
    config
}

pub fn services(config: &Config) -> Services {
    build_services(config).expect("services should build")
}

pub fn app(config: &Config) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    api::routes(services(config)).recover(error::handle_rejection)
}

pub fn paris_request() -> Value {
    json!({
        "booking": {
            "location": "Paris",
            "checkIn": "2024-06-01",
            "checkOut": "2024-06-03",
            "guests": 2
        },
        "preferences": {
            "budget": "medium",
            "interests": ["art", "beach"],
            "dietaryFilters": [],
            "partyType": "couple",
            "hasKids": false
        }
    })
}

pub fn results(prefix: &str, count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "title": format!("{prefix} {i}"),
                "content": format!("{prefix} description {i}"),
                "url": format!("https://example.com/{i}"),
                "score": 0.9
            })
        })
        .collect();
    json!({ "results": items })
}

pub async fn mock_search(server: &mut ServerGuard, query: &str, body: Value) -> Mock {
    server
        .mock("POST", "/search")
        .match_body(Matcher::PartialJson(json!({ "query": query })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}
