//! `/api/v1/users/me` handlers. The subject is always the token holder;
//! there is no admin surface for reading or mutating other accounts.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::auth::CurrentUser;
use crate::dto::UpdateProfileRequest;
use crate::error::{ApiError, ApiResult};
use crate::response::respond;
use crate::validation::validate_update_profile;
use crate::AppState;

pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let profile = state.identity.profile(user.id).await?;
    Ok(respond("Fetched profile successfully", profile))
}

pub async fn update_me(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<UpdateProfileRequest>,
) -> ApiResult<impl IntoResponse> {
    let patch = validate_update_profile(&body).map_err(ApiError::Validation)?;
    let profile = state.identity.update_profile(user.id, patch).await?;
    Ok(respond("Updated profile successfully", profile))
}

pub async fn delete_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    state.identity.remove(user.id).await?;
    Ok(respond("Deleted user successfully", serde_json::Value::Null))
}
