use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub accounts_registered_total: IntCounterVec,
    pub parcels_booked_total: IntCounter,
    pub assignments_total: IntCounter,
    pub status_transitions_total: IntCounterVec,
    pub auth_failures_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let accounts_registered_total = IntCounterVec::new(
            Opts::new("accounts_registered_total", "Accounts registered by role"),
            &["role"],
        )
        .expect("valid accounts_registered_total metric");

        let parcels_booked_total =
            IntCounter::new("parcels_booked_total", "Total parcels booked")
                .expect("valid parcels_booked_total metric");

        let assignments_total =
            IntCounter::new("assignments_total", "Total rider assignments created")
                .expect("valid assignments_total metric");

        let status_transitions_total = IntCounterVec::new(
            Opts::new(
                "status_transitions_total",
                "Status transitions by new status",
            ),
            &["status"],
        )
        .expect("valid status_transitions_total metric");

        let auth_failures_total = IntCounterVec::new(
            Opts::new("auth_failures_total", "Authorization failures by kind"),
            &["kind"],
        )
        .expect("valid auth_failures_total metric");

        registry
            .register(Box::new(accounts_registered_total.clone()))
            .expect("register accounts_registered_total");
        registry
            .register(Box::new(parcels_booked_total.clone()))
            .expect("register parcels_booked_total");
        registry
            .register(Box::new(assignments_total.clone()))
            .expect("register assignments_total");
        registry
            .register(Box::new(status_transitions_total.clone()))
            .expect("register status_transitions_total");
        registry
            .register(Box::new(auth_failures_total.clone()))
            .expect("register auth_failures_total");

        Self {
            registry,
            accounts_registered_total,
            parcels_booked_total,
            assignments_total,
            status_transitions_total,
            auth_failures_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
