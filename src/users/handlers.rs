use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::dto::{CreateUserRequest, UserResponse},
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(create_user))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Body is read raw so that a missing or malformed body gets the same 400
/// as a missing `email`.
#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Some(email) = CreateUserRequest::email_from_body(&body) else {
        warn!(body_len = body.len(), "create user rejected: email missing");
        return Err(ApiError::EmailRequired);
    };

    let user = state.users.create(&email).await?;
    info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user.into())))
}
