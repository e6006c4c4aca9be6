use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use stakeboard_core::profiles::{NewProfile, Profile};

use crate::{
    auth::CurrentUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest {
    email: String,
    display_name: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    access_token: String,
    profile: Profile,
}

async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignUpRequest>,
) -> ApiResult<Json<SessionResponse>> {
    if request.password.len() < 8 {
        return Err(stakeboard_core::Error::Validation(
            stakeboard_core::errors::ValidationError::InvalidInput(
                "Password must be at least 8 characters".to_string(),
            ),
        )
        .into());
    }

    let password_hash = state.auth.hash_password(&request.password)?;
    let profile = state
        .profile_service
        .register(NewProfile {
            id: None,
            email: request.email,
            display_name: request.display_name,
            password_hash,
        })
        .await?;

    let access_token = state.auth.issue_token(&profile.id)?;
    Ok(Json(SessionResponse {
        access_token,
        profile,
    }))
}

async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignInRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let credential = state
        .profile_service
        .find_credential_by_email(&request.email)?
        .ok_or_else(|| ApiError::unauthorized("unknown email or wrong password"))?;

    if !state
        .auth
        .verify_password(&credential.password_hash, &request.password)?
    {
        return Err(ApiError::unauthorized("unknown email or wrong password"));
    }

    let access_token = state.auth.issue_token(&credential.profile.id)?;
    Ok(Json(SessionResponse {
        access_token,
        profile: credential.profile,
    }))
}

/// Sessions are stateless tokens; sign-out is the client discarding its
/// token. The endpoint exists so clients have a uniform call to make.
async fn sign_out() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn me(
    State(state): State<Arc<AppState>>,
    CurrentUser(ctx): CurrentUser,
) -> ApiResult<Json<Profile>> {
    let profile = state.profile_service.get_profile(&ctx.user_id)?;
    Ok(Json(profile))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/signin", post(sign_in))
        .route("/auth/signout", post(sign_out))
        .route("/auth/me", get(me))
}
