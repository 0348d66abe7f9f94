use std::sync::Arc;

use percent_encoding::percent_decode_str;
use tracing::info;
use warp::{Rejection, Reply};

use crate::agents::planner::today;
use crate::agents::trip::format_date;
use crate::agents::weather::WeatherAgent;
use crate::error::ApiError;
use crate::models::WeatherQuery;

pub async fn handle_weather(
    location: String,
    query: WeatherQuery,
    weather: Arc<WeatherAgent>,
) -> Result<impl Reply, Rejection> {
    // Path segments arrive still percent-encoded ("New%20York").
    let location = percent_decode_str(&location)
        .decode_utf8()
        .map_err(|e| warp::reject::custom(ApiError::BadRequest(format!("invalid location: {}", e))))?
        .into_owned();
    let date = query
        .date
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format_date(today()));

    info!("Weather lookup for {} on {}", location, date);
    let forecast = weather.forecast(&location, &date).await;
    Ok(warp::reply::json(&forecast))
}
