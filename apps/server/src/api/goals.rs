use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde::Deserialize;

use stakeboard_core::goals::{Goal, NewGoal};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_goals(
    State(state): State<Arc<AppState>>,
    CurrentUser(ctx): CurrentUser,
) -> ApiResult<Json<Vec<Goal>>> {
    let owner_id = ctx.user_id.clone();
    let goals = state.goal_service.get_goals(&ctx, &owner_id)?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    CurrentUser(ctx): CurrentUser,
    Json(goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let g = state.goal_service.create_goal(&ctx, goal).await?;
    Ok((StatusCode::CREATED, Json(g)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetCompletedRequest {
    completed: bool,
}

async fn set_completed(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(ctx): CurrentUser,
    Json(request): Json<SetCompletedRequest>,
) -> ApiResult<Json<Goal>> {
    let g = state
        .goal_service
        .set_completed(&ctx, &id, request.completed)
        .await?;
    Ok(Json(g))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    CurrentUser(ctx): CurrentUser,
) -> ApiResult<StatusCode> {
    match state.goal_service.delete_goal(&ctx, &id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        // Deleting an already-absent goal is a success for retrying clients.
        Err(e) if e.is_not_found() => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into()),
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{id}/completed", put(set_completed))
        .route("/goals/{id}", delete(delete_goal))
}
