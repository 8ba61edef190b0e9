use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, put};
use axum::Json;
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::require_role;
use crate::error::AppError;
use crate::models::account::Role;
use crate::models::assignment::AssignmentWithParcel;
use crate::models::parcel::Parcel;
use crate::state::AppState;
use crate::workflow::assignments;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/rider/assignments", get(list_own_assignments))
        .route("/rider/parcels/:id/status", put(update_status))
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

async fn list_own_assignments(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<AssignmentWithParcel>>, AppError> {
    let caller = require_role(&state, &headers, Role::Rider)?;
    Ok(Json(assignments::list_for_rider(&state, caller.id)))
}

async fn update_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(parcel_id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<Parcel>, AppError> {
    let caller = require_role(&state, &headers, Role::Rider)?;
    let parcel = assignments::transition(&state, parcel_id, caller.id, &payload.status)?;
    Ok(Json(parcel))
}
