use dashmap::DashMap;
use uuid::Uuid;

use crate::auth::token::TokenAuthority;
use crate::config::Config;
use crate::models::account::Account;
use crate::models::assignment::Assignment;
use crate::models::history::StatusHistoryEntry;
use crate::models::parcel::Parcel;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub accounts: DashMap<Uuid, Account>,
    // Unique indexes double as race-safe gates: inserting through entry()
    // is the atomic check-then-insert for email and tracking-code uniqueness.
    pub accounts_by_email: DashMap<String, Uuid>,
    pub parcels: DashMap<Uuid, Parcel>,
    pub parcels_by_code: DashMap<String, Uuid>,
    // Keyed by parcel id: at most one assignment per parcel, ever.
    pub assignments: DashMap<Uuid, Assignment>,
    pub history: DashMap<Uuid, Vec<StatusHistoryEntry>>,
    pub tokens: TokenAuthority,
    pub rate_per_kg: f64,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            accounts: DashMap::new(),
            accounts_by_email: DashMap::new(),
            parcels: DashMap::new(),
            parcels_by_code: DashMap::new(),
            assignments: DashMap::new(),
            history: DashMap::new(),
            tokens: TokenAuthority::new(&config.jwt_secret, config.token_ttl_minutes),
            rate_per_kg: config.rate_per_kg,
            metrics: Metrics::new(),
        }
    }
}
