use chrono::Utc;
use dashmap::mapref::entry::Entry;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::account::Role;
use crate::models::parcel::{Parcel, ParcelStatus};
use crate::state::AppState;
use crate::workflow::history;

const MAX_CODE_ATTEMPTS: usize = 8;

pub struct ParcelDetails {
    pub receiver_name: String,
    pub receiver_phone: String,
    pub receiver_address: String,
    pub weight_kg: f64,
}

fn validate_details(details: &ParcelDetails) -> Result<(), AppError> {
    if !details.weight_kg.is_finite() || details.weight_kg <= 0.0 {
        return Err(AppError::Validation(
            "weight must be greater than 0".to_string(),
        ));
    }
    if details.receiver_name.trim().is_empty() {
        return Err(AppError::Validation("receiver name is required".to_string()));
    }
    if details.receiver_phone.trim().is_empty() {
        return Err(AppError::Validation(
            "receiver phone is required".to_string(),
        ));
    }
    if details.receiver_address.trim().is_empty() {
        return Err(AppError::Validation(
            "receiver address is required".to_string(),
        ));
    }
    Ok(())
}

pub fn create(state: &AppState, sender_id: Uuid, details: ParcelDetails) -> Result<Parcel, AppError> {
    validate_details(&details)?;

    let charge = details.weight_kg * state.rate_per_kg;
    let id = Uuid::new_v4();
    let tracking_code = claim_tracking_code(state, id)?;

    let parcel = Parcel {
        id,
        tracking_code,
        sender_id,
        receiver_name: details.receiver_name,
        receiver_phone: details.receiver_phone,
        receiver_address: details.receiver_address,
        weight_kg: details.weight_kg,
        charge,
        current_status: ParcelStatus::Booked,
        booked_at: Utc::now(),
    };

    state.parcels.insert(id, parcel.clone());
    history::record(state, id, ParcelStatus::Booked);

    state.metrics.parcels_booked_total.inc();
    info!(
        parcel_id = %parcel.id,
        tracking_code = %parcel.tracking_code,
        charge = parcel.charge,
        "parcel booked"
    );

    Ok(parcel)
}

pub fn create_on_behalf(
    state: &AppState,
    customer_id: Uuid,
    details: ParcelDetails,
) -> Result<Parcel, AppError> {
    let is_customer = state
        .accounts
        .get(&customer_id)
        .map(|account| account.role == Role::Customer)
        .unwrap_or(false);

    if !is_customer {
        return Err(AppError::NotFound(format!(
            "customer {customer_id} not found"
        )));
    }

    create(state, customer_id, details)
}

pub fn edit(state: &AppState, parcel_id: Uuid, details: ParcelDetails) -> Result<Parcel, AppError> {
    validate_details(&details)?;

    let updated = {
        let mut parcel = state
            .parcels
            .get_mut(&parcel_id)
            .ok_or_else(|| AppError::NotFound(format!("parcel {parcel_id} not found")))?;

        parcel.receiver_name = details.receiver_name;
        parcel.receiver_phone = details.receiver_phone;
        parcel.receiver_address = details.receiver_address;
        parcel.weight_kg = details.weight_kg;
        parcel.charge = details.weight_kg * state.rate_per_kg;
        parcel.clone()
    };

    // Edits never touch the status, but the audit trail still marks that an
    // edit happened at this point by re-recording the current status.
    history::record(state, parcel_id, updated.current_status);
    info!(parcel_id = %parcel_id, charge = updated.charge, "parcel edited");

    Ok(updated)
}

pub fn track(state: &AppState, tracking_code: &str) -> Result<Parcel, AppError> {
    state
        .parcels_by_code
        .get(tracking_code)
        .and_then(|id| state.parcels.get(&*id).map(|entry| entry.value().clone()))
        .ok_or_else(|| AppError::NotFound(format!("parcel {tracking_code} not found")))
}

pub fn list_for_sender(state: &AppState, sender_id: Uuid) -> Vec<Parcel> {
    state
        .parcels
        .iter()
        .filter(|entry| entry.value().sender_id == sender_id)
        .map(|entry| entry.value().clone())
        .collect()
}

pub fn list_all(state: &AppState) -> Vec<Parcel> {
    state
        .parcels
        .iter()
        .map(|entry| entry.value().clone())
        .collect()
}

// Random token claimed through the unique index; a colliding candidate is
// regenerated rather than handed out twice. Never derived from the wall clock.
fn claim_tracking_code(state: &AppState, parcel_id: Uuid) -> Result<String, AppError> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let candidate = generate_code();
        match state.parcels_by_code.entry(candidate.clone()) {
            Entry::Occupied(_) => continue,
            Entry::Vacant(slot) => {
                slot.insert(parcel_id);
                return Ok(candidate);
            }
        }
    }

    Err(AppError::Internal(
        "exhausted tracking code candidates".to_string(),
    ))
}

fn generate_code() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("TRK-{}", token[..12].to_ascii_uppercase())
}
