use std::sync::Arc;

use tracing::info;
use warp::{Rejection, Reply};

use crate::agents::chat::ChatAgent;
use crate::models::ChatRequest;

pub async fn handle_chat(
    request: ChatRequest,
    chat: Arc<ChatAgent>,
) -> Result<impl Reply, Rejection> {
    info!("Chat message received ({} chars)", request.message.chars().count());
    let reply = chat.reply(request).await;
    Ok(warp::reply::json(&reply))
}
