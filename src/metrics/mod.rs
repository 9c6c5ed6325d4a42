use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for the customer registry
// ============================================================================
//
// Tracks:
// - Successful registrations
// - Rejected registrations, by reason
// - Removed entries
// - Current number of customers held
//
// There is no HTTP exposition; callers render the text format themselves.
// ============================================================================

pub struct RegistryMetrics {
    registry: Registry,

    pub customers_registered: IntCounter,
    pub registrations_rejected: IntCounterVec,
    pub customers_removed: IntCounter,
    pub customers_current: IntGauge,
}

impl RegistryMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let customers_registered = IntCounter::new(
            "customers_registered_total",
            "Total customers successfully registered",
        )?;
        registry.register(Box::new(customers_registered.clone()))?;

        let registrations_rejected = IntCounterVec::new(
            Opts::new(
                "customer_registrations_rejected_total",
                "Total customer registrations rejected",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(registrations_rejected.clone()))?;

        let customers_removed = IntCounter::new(
            "customers_removed_total",
            "Total customer entries removed",
        )?;
        registry.register(Box::new(customers_removed.clone()))?;

        let customers_current = IntGauge::new(
            "customers_current",
            "Number of customers currently held by the registry",
        )?;
        registry.register(Box::new(customers_current.clone()))?;

        Ok(Self {
            registry,
            customers_registered,
            registrations_rejected,
            customers_removed,
            customers_current,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_registered(&self, current: usize) {
        self.customers_registered.inc();
        self.customers_current.set(current as i64);
    }

    pub fn record_rejected(&self, reason: &str) {
        self.registrations_rejected.with_label_values(&[reason]).inc();
    }

    pub fn record_removed(&self, removed: usize, current: usize) {
        self.customers_removed.inc_by(removed as u64);
        self.customers_current.set(current as i64);
    }

    /// Encode all metrics in the Prometheus text exposition format
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;

        Ok(String::from_utf8(buffer)?)
    }
}
