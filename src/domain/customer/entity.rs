use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value_objects::Email;

// ============================================================================
// Customer Entity
// ============================================================================

/// A registered bank customer.
///
/// Plain value holder: validation happens in the registry, not here. The
/// display name and email are derived on every access and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
}

impl Customer {
    pub(crate) fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthday: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthday,
        }
    }

    /// Lowercased first name followed by the last name as entered
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.to_lowercase(), self.last_name)
    }

    pub fn email(&self) -> Email {
        Email::for_customer(&self.first_name, &self.last_name)
    }

    /// Exact, case-sensitive match on the (first name, last name) identity key
    pub fn has_same_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}
