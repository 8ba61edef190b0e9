use chrono::Utc;
use dashmap::mapref::entry::Entry;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::account::Role;
use crate::models::assignment::{Assignment, AssignmentWithParcel};
use crate::models::parcel::{Parcel, ParcelStatus};
use crate::state::AppState;
use crate::workflow::history;

pub fn assign(state: &AppState, parcel_id: Uuid, rider_id: Uuid) -> Result<Assignment, AppError> {
    if !state.parcels.contains_key(&parcel_id) {
        return Err(AppError::NotFound(format!("parcel {parcel_id} not found")));
    }

    let is_rider = state
        .accounts
        .get(&rider_id)
        .map(|account| account.role == Role::Rider)
        .unwrap_or(false);

    if !is_rider {
        return Err(AppError::NotFound(format!("rider {rider_id} not found")));
    }

    // Keyed by parcel id: the vacant-entry insert is the atomic
    // check-then-insert gate for the one-assignment-per-parcel invariant.
    match state.assignments.entry(parcel_id) {
        Entry::Occupied(_) => Err(AppError::AlreadyAssigned),
        Entry::Vacant(slot) => {
            let assignment = Assignment {
                id: Uuid::new_v4(),
                parcel_id,
                rider_id,
                assigned_at: Utc::now(),
            };

            slot.insert(assignment.clone());
            state.metrics.assignments_total.inc();
            info!(parcel_id = %parcel_id, rider_id = %rider_id, "rider assigned");

            Ok(assignment)
        }
    }
}

pub fn list_for_rider(state: &AppState, rider_id: Uuid) -> Vec<AssignmentWithParcel> {
    state
        .assignments
        .iter()
        .filter(|entry| entry.value().rider_id == rider_id)
        .filter_map(|entry| {
            let parcel = state
                .parcels
                .get(&entry.value().parcel_id)
                .map(|parcel| parcel.value().clone())?;

            Some(AssignmentWithParcel {
                assignment: entry.value().clone(),
                parcel,
            })
        })
        .collect()
}

// The only mutation path open to riders. Any of the five status values is
// accepted regardless of the current one, so a rider can correct an earlier
// update; order is not enforced.
pub fn transition(
    state: &AppState,
    parcel_id: Uuid,
    rider_id: Uuid,
    new_status: &str,
) -> Result<Parcel, AppError> {
    if !state.parcels.contains_key(&parcel_id) {
        return Err(AppError::NotFound(format!("parcel {parcel_id} not found")));
    }

    let is_assigned = state
        .assignments
        .get(&parcel_id)
        .map(|assignment| assignment.rider_id == rider_id)
        .unwrap_or(false);

    if !is_assigned {
        return Err(AppError::NotAssigned);
    }

    let status = ParcelStatus::parse(new_status)
        .ok_or_else(|| AppError::InvalidStatus(new_status.to_string()))?;

    let updated = {
        let mut parcel = state
            .parcels
            .get_mut(&parcel_id)
            .ok_or_else(|| AppError::NotFound(format!("parcel {parcel_id} not found")))?;

        parcel.current_status = status;
        parcel.clone()
    };

    history::record(state, parcel_id, status);
    state
        .metrics
        .status_transitions_total
        .with_label_values(&[status.as_str()])
        .inc();
    info!(parcel_id = %parcel_id, status = %status, "parcel status updated");

    Ok(updated)
}
