// ============================================================================
// Customer Registry
// ============================================================================
//
// In-process registry of bank customers: register, de-duplicate, remove and
// search by exact name. No persistence and no network.
//
// ============================================================================

pub mod domain;
pub mod metrics;

pub use domain::customer::{
    Customer, CustomerCommand, CustomerError, CustomerEvent, CustomerRegistry, Email,
};
pub use metrics::RegistryMetrics;
