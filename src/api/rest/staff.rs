use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post, put};
use axum::Json;
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::rest::customer::CreateParcelRequest;
use crate::auth::require_role;
use crate::error::AppError;
use crate::models::account::{AccountView, Role};
use crate::models::assignment::Assignment;
use crate::models::parcel::Parcel;
use crate::state::AppState;
use crate::workflow::{accounts, assignments, parcels};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/staff/parcels", post(create_on_behalf).get(list_all_parcels))
        .route("/staff/parcels/:id", put(edit_parcel))
        .route("/staff/riders", get(list_riders))
        .route("/staff/assignments", post(assign_rider))
}

#[derive(Deserialize)]
pub struct CreateOnBehalfRequest {
    pub customer_id: Uuid,
    #[serde(flatten)]
    pub parcel: CreateParcelRequest,
}

#[derive(Deserialize)]
pub struct AssignRiderRequest {
    pub parcel_id: Uuid,
    pub rider_id: Uuid,
}

async fn create_on_behalf(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateOnBehalfRequest>,
) -> Result<Json<Parcel>, AppError> {
    require_role(&state, &headers, Role::Staff)?;
    let parcel = parcels::create_on_behalf(
        &state,
        payload.customer_id,
        payload.parcel.into_details(),
    )?;
    Ok(Json(parcel))
}

async fn edit_parcel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(parcel_id): Path<Uuid>,
    Json(payload): Json<CreateParcelRequest>,
) -> Result<Json<Parcel>, AppError> {
    require_role(&state, &headers, Role::Staff)?;
    let parcel = parcels::edit(&state, parcel_id, payload.into_details())?;
    Ok(Json(parcel))
}

async fn list_all_parcels(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Parcel>>, AppError> {
    require_role(&state, &headers, Role::Staff)?;
    Ok(Json(parcels::list_all(&state)))
}

async fn list_riders(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<AccountView>>, AppError> {
    require_role(&state, &headers, Role::Staff)?;
    Ok(Json(accounts::list_riders(&state)))
}

async fn assign_rider(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<AssignRiderRequest>,
) -> Result<Json<Assignment>, AppError> {
    require_role(&state, &headers, Role::Staff)?;
    let assignment = assignments::assign(&state, payload.parcel_id, payload.rider_id)?;
    Ok(Json(assignment))
}
