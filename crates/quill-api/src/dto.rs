//! Request body and query DTOs.
//!
//! Every field arrives optional so that missing values surface as
//! per-field validation messages (see [`crate::validation`]) instead of
//! opaque deserialization rejections.

use serde::Deserialize;

/// Body of `POST /api/v1/auth/register`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Body of `POST /api/v1/auth/login`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /api/v1/notes`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of `PATCH /api/v1/notes/:id`. Both fields optional; absent
/// fields are left untouched.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of `PATCH /api/v1/users/me`. Password, when present, is the new
/// plaintext and gets re-hashed by the identity service.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Query string of `GET /api/v1/notes`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ListNotesQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}
