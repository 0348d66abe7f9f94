// Finder Agent: templated activity and restaurant searches

use crate::agents::search::SearchGateway;
use crate::middleware::OperationTracer;
use crate::models::SearchResult;

pub fn activity_query(location: &str, interests: &[String]) -> String {
    let interests = if interests.is_empty() {
        "top attractions".to_string()
    } else {
        interests.join(", ")
    };
    format!("{} activities and things to do in {}", interests, location)
}

pub fn restaurant_query(location: &str, dietary_filters: &[String]) -> String {
    let dietary = if dietary_filters.is_empty() {
        "restaurants".to_string()
    } else {
        dietary_filters.join(", ")
    };
    format!("best {} restaurants in {}", dietary, location)
}

/// Results come back unmodified, in the provider's order.
#[derive(Clone)]
pub struct FinderAgent {
    search: SearchGateway,
    tracer: OperationTracer,
}

impl FinderAgent {
    pub fn new(search: SearchGateway, tracer: OperationTracer) -> Self {
        Self { search, tracer }
    }

    pub async fn find_activities(&self, location: &str, interests: &[String]) -> Vec<SearchResult> {
        self.tracer
            .run("search_activities", self.search.search(&activity_query(location, interests)))
            .await
    }

    pub async fn find_restaurants(&self, location: &str, dietary_filters: &[String]) -> Vec<SearchResult> {
        self.tracer
            .run(
                "search_restaurants",
                self.search.search(&restaurant_query(location, dietary_filters)),
            )
            .await
    }
}
