use std::sync::Arc;

use warp::{Filter, Rejection, Reply};

use crate::agents::chat::ChatAgent;
use crate::agents::planner::PlannerAgent;
use crate::agents::weather::WeatherAgent;

mod chat;
mod plan;
mod system;
mod weather;

const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Agents shared by every request handler.
#[derive(Clone)]
pub struct Services {
    pub planner: Arc<PlannerAgent>,
    pub chat: Arc<ChatAgent>,
    pub weather: Arc<WeatherAgent>,
    pub tracing_enabled: bool,
}

pub fn routes(services: Services) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let api = warp::path("api").and(warp::path("concierge"));

    let plan_route = api
        .and(warp::path("plan"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_planner(services.planner.clone()))
        .and_then(plan::handle_plan);

    let chat_route = api
        .and(warp::path("chat"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_chat(services.chat.clone()))
        .and_then(chat::handle_chat);

    let weather_route = api
        .and(warp::path("weather"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query())
        .and(with_weather(services.weather.clone()))
        .and_then(weather::handle_weather);

    let tracing_enabled = services.tracing_enabled;
    let root_route = warp::path::end()
        .and(warp::get())
        .map(move || system::root(tracing_enabled));

    let health_route = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(system::health);

    let metrics_route = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(system::handle_metrics);

    root_route
        .or(health_route)
        .or(metrics_route)
        .or(plan_route)
        .or(chat_route)
        .or(weather_route)
}

fn with_planner(
    planner: Arc<PlannerAgent>,
) -> impl Filter<Extract = (Arc<PlannerAgent>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || planner.clone())
}

fn with_chat(
    chat: Arc<ChatAgent>,
) -> impl Filter<Extract = (Arc<ChatAgent>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || chat.clone())
}

fn with_weather(
    weather: Arc<WeatherAgent>,
) -> impl Filter<Extract = (Arc<WeatherAgent>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || weather.clone())
}
