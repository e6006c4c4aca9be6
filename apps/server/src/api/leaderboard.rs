use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use stakeboard_core::leaderboard::{LeaderboardEntry, UserSummary};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    CurrentUser(_ctx): CurrentUser,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let entries = state.leaderboard_service.get_leaderboard()?;
    Ok(Json(entries))
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    CurrentUser(ctx): CurrentUser,
) -> ApiResult<Json<UserSummary>> {
    let owner_id = ctx.user_id.clone();
    let summary = state.leaderboard_service.get_user_summary(&ctx, &owner_id)?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/leaderboard", get(get_leaderboard))
        .route("/summary", get(get_summary))
}
