use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value_objects::Email;

// ============================================================================
// Customer Registry Events
// ============================================================================
//
// Outcome records returned by `CustomerRegistry::handle`. They describe what a
// command changed; nothing subscribes to them.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CustomerEvent {
    Registered(CustomerRegistered),
    Removed(CustomerRemoved),
}

impl CustomerEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            CustomerEvent::Registered(_) => "CustomerRegistered",
            CustomerEvent::Removed(_) => "CustomerRemoved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRegistered {
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub email: Email,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRemoved {
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    /// Number of entries deleted, always at least one
    pub removed: usize,
}
