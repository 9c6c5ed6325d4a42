use chrono::NaiveDate;

// ============================================================================
// Customer Registry Commands
// ============================================================================

#[derive(Debug, Clone)]
pub enum CustomerCommand {
    RegisterCustomer {
        first_name: String,
        last_name: String,
        birthday: NaiveDate,
    },
    /// Matches on the name AND the birthday
    RemoveCustomer {
        first_name: String,
        last_name: String,
        birthday: NaiveDate,
    },
}

impl CustomerCommand {
    pub fn register(first_name: &str, last_name: &str, birthday: NaiveDate) -> Self {
        CustomerCommand::RegisterCustomer {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birthday,
        }
    }

    pub fn remove(first_name: &str, last_name: &str, birthday: NaiveDate) -> Self {
        CustomerCommand::RemoveCustomer {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birthday,
        }
    }
}
