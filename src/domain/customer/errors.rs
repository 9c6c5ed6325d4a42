// ============================================================================
// Customer Registry Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerError {
    #[error("mandatory name parameter is missing")]
    MissingName,

    #[error("customer already exists: {first_name} {last_name}")]
    DuplicateCustomer {
        first_name: String,
        last_name: String,
    },
}

impl CustomerError {
    /// Stable label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            CustomerError::MissingName => "missing_name",
            CustomerError::DuplicateCustomer { .. } => "duplicate_customer",
        }
    }
}
