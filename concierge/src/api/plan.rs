use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use warp::{Rejection, Reply};

use crate::agents::planner::PlannerAgent;
use crate::models::AgentRequest;

pub async fn handle_plan(
    request: AgentRequest,
    planner: Arc<PlannerAgent>,
) -> Result<impl Reply, Rejection> {
    let request_id = Uuid::new_v4();
    info!(
        "Processing plan request [{}]: {} ({} guests)",
        request_id, request.booking.location, request.booking.guests
    );

    let plan = planner.plan(&request).await.map_err(warp::reject::custom)?;

    info!("Plan request [{}] complete", request_id);
    Ok(warp::reply::json(&plan))
}
