//! `/api/v1/auth` handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::dto::{LoginRequest, RegisterRequest};
use crate::error::{ApiError, ApiResult};
use crate::response::respond;
use crate::validation::{validate_login, validate_register};
use crate::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let req = validate_register(&body).map_err(ApiError::Validation)?;
    let payload = state.identity.register(req).await?;
    Ok((
        StatusCode::CREATED,
        respond("Registration completed successfully, now logging in", payload),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let req = validate_login(&body).map_err(ApiError::Validation)?;
    let payload = state.identity.login(&req.email, &req.password).await?;
    Ok(respond("Login completed successfully", payload))
}
