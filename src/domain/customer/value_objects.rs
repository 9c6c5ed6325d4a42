use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Domain every derived customer email address lives under
pub const EMAIL_DOMAIN: &str = "mybank.com";

/// Customer email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(pub String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Build the bank address for a customer: `first.last@mybank.com`, all lowercase
    pub fn for_customer(first_name: &str, last_name: &str) -> Self {
        Self(format!(
            "{}.{}@{}",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            EMAIL_DOMAIN
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
