use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    Booked,
    Packed,
    InTransit,
    OutForDelivery,
    Delivered,
}

impl ParcelStatus {
    // Requested status values arrive as strings so an unknown value can be
    // rejected with a stable error kind instead of a framework-level reject.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "booked" => Some(ParcelStatus::Booked),
            "packed" => Some(ParcelStatus::Packed),
            "in_transit" => Some(ParcelStatus::InTransit),
            "out_for_delivery" => Some(ParcelStatus::OutForDelivery),
            "delivered" => Some(ParcelStatus::Delivered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParcelStatus::Booked => "booked",
            ParcelStatus::Packed => "packed",
            ParcelStatus::InTransit => "in_transit",
            ParcelStatus::OutForDelivery => "out_for_delivery",
            ParcelStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Parcel {
    pub id: Uuid,
    pub tracking_code: String,
    pub sender_id: Uuid,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub receiver_address: String,
    pub weight_kg: f64,
    pub charge: f64,
    pub current_status: ParcelStatus,
    pub booked_at: DateTime<Utc>,
}
