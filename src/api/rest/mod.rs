pub mod auth;
pub mod customer;
pub mod rider;
pub mod staff;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(auth::router())
        .merge(customer::router())
        .merge(staff::router())
        .merge(rider::router())
        .route("/", get(home))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "service": "courier-api",
        "message": "courier & parcel delivery api"
    }))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    accounts: usize,
    parcels: usize,
    assignments: usize,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        accounts: state.accounts.len(),
        parcels: state.parcels.len(),
        assignments: state.assignments.len(),
    })
}

async fn metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err).into_response(),
    }
}
