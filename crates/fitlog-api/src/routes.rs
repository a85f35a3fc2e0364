use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use fitlog_core::db::Database;
use fitlog_core::sync::{PullResponse, PushRequest, PushResponse};
use fitlog_core::SyncEngine;

use crate::auth::{extract_user, AuthenticatedUser};
use crate::config::AppConfig;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Database>>,
    engine: Arc<SyncEngine>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, fitlog_core::Error> {
        Ok(Self::with_database(Database::open(&config.database_path)?))
    }

    pub fn with_database(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            engine: Arc::new(SyncEngine::new()),
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/sync/pull", get(sync_pull))
        .route("/sync/push", post(sync_push))
        .route_layer(middleware::from_fn(require_auth));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/v1", protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: i64,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp(),
    })
}

async fn require_auth(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let user = extract_user(request.headers())?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[derive(Debug, Deserialize)]
struct PullParams {
    since: String,
}

async fn sync_pull(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<PullParams>,
) -> Result<Json<PullResponse>, ApiError> {
    let mut db = state.db.lock().await;
    let response = state
        .engine
        .pull(db.connection_mut(), &user.user_id, &params.since)?;
    Ok(Json(response))
}

async fn sync_push(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<PushRequest>,
) -> Result<Json<PushResponse>, ApiError> {
    let mut db = state.db.lock().await;
    let response = state
        .engine
        .push(db.connection_mut(), &user.user_id, request)?;
    tracing::info!(
        user = %user.user_id,
        conflicts = response.conflicts_count,
        "push handled"
    );
    Ok(Json(response))
}
