use chrono::Utc;
use uuid::Uuid;

use crate::models::history::StatusHistoryEntry;
use crate::models::parcel::ParcelStatus;
use crate::state::AppState;

// Append-only: entries are pushed in call order, so the per-parcel vector
// is already the chronological audit trail.
pub fn record(state: &AppState, parcel_id: Uuid, status: ParcelStatus) {
    let entry = StatusHistoryEntry {
        parcel_id,
        status,
        recorded_at: Utc::now(),
    };

    state.history.entry(parcel_id).or_default().push(entry);
}

pub fn for_parcel(state: &AppState, parcel_id: Uuid) -> Vec<StatusHistoryEntry> {
    state
        .history
        .get(&parcel_id)
        .map(|entries| entries.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::{for_parcel, record};
    use crate::config::Config;
    use crate::models::parcel::ParcelStatus;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState::new(&Config {
            http_port: 0,
            log_level: "info".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 1440,
            rate_per_kg: 50.0,
        })
    }

    #[test]
    fn entries_come_back_in_recording_order() {
        let state = test_state();
        let parcel_id = Uuid::new_v4();

        record(&state, parcel_id, ParcelStatus::Booked);
        record(&state, parcel_id, ParcelStatus::Packed);
        record(&state, parcel_id, ParcelStatus::OutForDelivery);

        let entries = for_parcel(&state, parcel_id);
        let statuses: Vec<_> = entries.iter().map(|entry| entry.status).collect();
        assert_eq!(
            statuses,
            vec![
                ParcelStatus::Booked,
                ParcelStatus::Packed,
                ParcelStatus::OutForDelivery
            ]
        );
        assert!(entries.windows(2).all(|w| w[0].recorded_at <= w[1].recorded_at));
    }

    #[test]
    fn unknown_parcel_has_empty_history() {
        let state = test_state();
        assert!(for_parcel(&state, Uuid::new_v4()).is_empty());
    }
}
