use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::auth::require_role;
use crate::error::AppError;
use crate::models::account::Role;
use crate::models::history::StatusHistoryEntry;
use crate::models::parcel::Parcel;
use crate::state::AppState;
use crate::workflow::{history, parcels};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customer/parcels", post(create_parcel).get(list_own_parcels))
        .route("/parcels/track/:code", get(track_parcel))
}

#[derive(Deserialize)]
pub struct CreateParcelRequest {
    pub receiver_name: String,
    pub receiver_phone: String,
    pub receiver_address: String,
    pub weight_kg: f64,
}

impl CreateParcelRequest {
    pub fn into_details(self) -> parcels::ParcelDetails {
        parcels::ParcelDetails {
            receiver_name: self.receiver_name,
            receiver_phone: self.receiver_phone,
            receiver_address: self.receiver_address,
            weight_kg: self.weight_kg,
        }
    }
}

#[derive(Serialize)]
pub struct TrackResponse {
    pub parcel: Parcel,
    pub history: Vec<StatusHistoryEntry>,
}

async fn create_parcel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateParcelRequest>,
) -> Result<Json<Parcel>, AppError> {
    let caller = require_role(&state, &headers, Role::Customer)?;
    let parcel = parcels::create(&state, caller.id, payload.into_details())?;
    Ok(Json(parcel))
}

async fn list_own_parcels(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Parcel>>, AppError> {
    let caller = require_role(&state, &headers, Role::Customer)?;
    Ok(Json(parcels::list_for_sender(&state, caller.id)))
}

// Unauthenticated: anyone holding a tracking code may follow the parcel.
async fn track_parcel(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<TrackResponse>, AppError> {
    let parcel = parcels::track(&state, &code)?;
    let history = history::for_parcel(&state, parcel.id);

    Ok(Json(TrackResponse { parcel, history }))
}
