use std::sync::Arc;

use chrono::NaiveDate;

use crate::metrics::RegistryMetrics;

use super::commands::CustomerCommand;
use super::entity::Customer;
use super::errors::CustomerError;
use super::events::{CustomerEvent, CustomerRegistered, CustomerRemoved};

// ============================================================================
// Customer Registry
// ============================================================================
//
// Owns the ordered customer collection. Every lookup is a linear scan with a
// match predicate; the collection is small and insertion order is observable.
//
// Name uniqueness is only checked when a customer is added, never enforced as
// a standing invariant. Removal matches on name AND birthday.
//
// Not synchronized: wrap in a lock held for the whole call to share it.
//
// ============================================================================

#[derive(Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
    metrics: Option<Arc<RegistryMetrics>>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: Arc<RegistryMetrics>) -> Self {
        Self {
            customers: Vec::new(),
            metrics: Some(metrics),
        }
    }

    /// Handle a command and return the resulting events
    pub fn handle(&mut self, command: CustomerCommand) -> Result<Vec<CustomerEvent>, CustomerError> {
        match command {
            CustomerCommand::RegisterCustomer { first_name, last_name, birthday } => {
                if let Err(e) = self.validate_registration(&first_name, &last_name) {
                    tracing::warn!(
                        reason = e.reason(),
                        first_name = %first_name,
                        last_name = %last_name,
                        "Customer registration rejected"
                    );
                    if let Some(metrics) = &self.metrics {
                        metrics.record_rejected(e.reason());
                    }
                    return Err(e);
                }

                let customer = Customer::new(first_name, last_name, birthday);
                let event = CustomerRegistered {
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                    birthday: customer.birthday,
                    email: customer.email(),
                };
                self.customers.push(customer);

                tracing::debug!(
                    first_name = %event.first_name,
                    last_name = %event.last_name,
                    total = self.customers.len(),
                    "Customer registered"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_registered(self.customers.len());
                }

                Ok(vec![CustomerEvent::Registered(event)])
            }

            CustomerCommand::RemoveCustomer { first_name, last_name, birthday } => {
                let before = self.customers.len();
                self.customers.retain(|c| {
                    !(c.has_same_name(&first_name, &last_name) && c.birthday == birthday)
                });
                let removed = before - self.customers.len();

                if removed == 0 {
                    tracing::debug!(
                        first_name = %first_name,
                        last_name = %last_name,
                        %birthday,
                        "No customer matched removal"
                    );
                    return Ok(vec![]);
                }

                tracing::debug!(
                    first_name = %first_name,
                    last_name = %last_name,
                    %birthday,
                    removed,
                    total = self.customers.len(),
                    "Customer removed"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_removed(removed, self.customers.len());
                }

                Ok(vec![CustomerEvent::Removed(CustomerRemoved {
                    first_name,
                    last_name,
                    birthday,
                    removed,
                })])
            }
        }
    }

    /// Register a new customer. Names are stored exactly as given.
    pub fn add_customer(
        &mut self,
        first_name: &str,
        last_name: &str,
        birthday: NaiveDate,
    ) -> Result<(), CustomerError> {
        self.handle(CustomerCommand::register(first_name, last_name, birthday))?;
        Ok(())
    }

    pub fn customer_exists(&self, first_name: &str, last_name: &str) -> bool {
        self.customers
            .iter()
            .any(|c| c.has_same_name(first_name, last_name))
    }

    /// Remove every customer with this exact name and birthday; no-op if none match
    pub fn remove_customer(&mut self, first_name: &str, last_name: &str, birthday: NaiveDate) {
        // Removal never fails
        let _ = self.handle(CustomerCommand::remove(first_name, last_name, birthday));
    }

    /// First customer, in insertion order, with this exact name
    pub fn search_customer(&self, first_name: &str, last_name: &str) -> Option<Customer> {
        self.customers
            .iter()
            .find(|c| c.has_same_name(first_name, last_name))
            .cloned()
    }

    /// All customers in insertion order
    pub fn search_customers(&self) -> Vec<Customer> {
        self.search(|_| true)
    }

    pub fn search_customers_by_name(&self, first_name: &str, last_name: &str) -> Vec<Customer> {
        self.search(|c| c.has_same_name(first_name, last_name))
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    fn validate_registration(&self, first_name: &str, last_name: &str) -> Result<(), CustomerError> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(CustomerError::MissingName);
        }
        if self.customer_exists(first_name, last_name) {
            return Err(CustomerError::DuplicateCustomer {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            });
        }
        Ok(())
    }

    fn search<F>(&self, matches: F) -> Vec<Customer>
    where
        F: Fn(&Customer) -> bool,
    {
        let result: Vec<Customer> = self
            .customers
            .iter()
            .filter(|c| matches(c))
            .cloned()
            .collect();
        tracing::trace!(matched = result.len(), total = self.customers.len(), "Customer search");
        result
    }
}
