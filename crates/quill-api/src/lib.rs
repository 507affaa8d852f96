//! HTTP API for quill.
//!
//! Route map (all under `/api/v1` except `/health`):
//! - `POST /auth/register`, `POST /auth/login` — public
//! - `GET|PATCH|DELETE /users/me` — bearer-gated profile surface
//! - `GET|POST /notes`, `GET|PATCH|DELETE /notes/:id` — bearer-gated,
//!   always scoped to the token holder

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;
pub mod services;
pub mod validation;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use quill_auth::TokenSigner;
use quill_db::Database;
use services::{IdentityService, NoteService};

/// Shared handler state. Cheap to clone; the services hold `Arc`s over
/// the repositories and the signer holds only the secret and TTL.
#[derive(Clone)]
pub struct AppState {
    pub identity: IdentityService,
    pub notes: NoteService,
    pub tokens: TokenSigner,
}

impl AppState {
    pub fn new(db: &Database, tokens: TokenSigner) -> Self {
        Self {
            identity: IdentityService::new(Arc::new(db.users.clone()), tokens.clone()),
            notes: NoteService::new(Arc::new(db.notes.clone())),
            tokens,
        }
    }
}

/// Generates time-ordered UUIDv7 request correlation IDs, so request
/// ids in logs sort chronologically.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/users/me",
            get(handlers::users::me)
                .patch(handlers::users::update_me)
                .delete(handlers::users::delete_me),
        )
        .route(
            "/notes",
            get(handlers::notes::list).post(handlers::notes::create),
        )
        .route(
            "/notes/:id",
            get(handlers::notes::get_one)
                .patch(handlers::notes::update)
                .delete(handlers::notes::remove),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]),
        )
        .with_state(state)
}
