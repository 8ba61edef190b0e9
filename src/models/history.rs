use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::parcel::ParcelStatus;

#[derive(Debug, Clone, Serialize)]
pub struct StatusHistoryEntry {
    pub parcel_id: Uuid,
    pub status: ParcelStatus,
    pub recorded_at: DateTime<Utc>,
}
