use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::parcel::Parcel;

#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub id: Uuid,
    pub parcel_id: Uuid,
    pub rider_id: Uuid,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentWithParcel {
    pub assignment: Assignment,
    pub parcel: Parcel,
}
