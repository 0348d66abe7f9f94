use std::convert::Infallible;

use thiserror::Error;
use tracing::error;
use warp::{http::StatusCode, reject::Reject, Rejection, Reply};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Metrics error: {0}")]
    MetricsError(String),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Upstream response malformed: {0}")]
    MalformedResponse(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl Reject for ApiError {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn error_reply(code: StatusCode, message: &str, detail: String) -> warp::reply::WithStatus<warp::reply::Json> {
    let json = warp::reply::json(&serde_json::json!({
        "error": message,
        "detail": detail,
    }));
    warp::reply::with_status(json, code)
}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    if let Some(api_err) = err.find::<ApiError>() {
        let code = api_err.status();
        let message = match code {
            StatusCode::BAD_REQUEST => "Bad request",
            _ => "Internal server error",
        };
        if code.is_server_error() {
            error!("Request failed: {}", api_err);
        }
        return Ok(error_reply(code, message, api_err.to_string()));
    }

    if err.is_not_found() {
        return Ok(error_reply(StatusCode::NOT_FOUND, "Not found", "Resource not found".to_string()));
    }

    if let Some(body_err) = err.find::<warp::filters::body::BodyDeserializeError>() {
        return Ok(error_reply(StatusCode::BAD_REQUEST, "Bad request", body_err.to_string()));
    }

    if let Some(query_err) = err.find::<warp::reject::InvalidQuery>() {
        return Ok(error_reply(StatusCode::BAD_REQUEST, "Bad request", query_err.to_string()));
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed",
            "Method not allowed".to_string(),
        ));
    }

    error!("Unhandled rejection: {:?}", err);
    Ok(error_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        format!("{:?}", err),
    ))
}
