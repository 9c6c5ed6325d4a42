// Acceptance scenarios for the customer registry, driven only through its
// public operations.

use chrono::NaiveDate;

use customer_registry::{CustomerError, CustomerRegistry};

fn default_birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 1, 1).unwrap()
}

fn registry_with(customers: &[(&str, &str)]) -> CustomerRegistry {
    let mut registry = CustomerRegistry::new();
    for (first, last) in customers {
        registry.add_customer(first, last, default_birthday()).unwrap();
    }
    registry
}

#[test]
fn create_customer_successfully() {
    let mut registry = CustomerRegistry::new();

    let result = registry.add_customer("Sabine", "Mustermann", default_birthday());

    assert!(result.is_ok());
    assert!(registry.customer_exists("Sabine", "Mustermann"));
    assert!(registry.search_customer("Sabine", "Mustermann").is_some());
}

#[test]
fn create_customer_without_first_name_fails() {
    let mut registry = CustomerRegistry::new();

    let result = registry.add_customer("", "Mustermann", default_birthday());

    let err = result.unwrap_err();
    assert_eq!(err, CustomerError::MissingName);
    assert_eq!(err.to_string(), "mandatory name parameter is missing");
    assert!(registry.search_customer("", "Mustermann").is_none());
}

#[test]
fn create_duplicate_customer_fails() {
    let mut registry = CustomerRegistry::new();
    registry.add_customer("Sabine", "Mustermann", default_birthday()).unwrap();

    let err = registry
        .add_customer("Sabine", "Mustermann", default_birthday())
        .unwrap_err();

    assert!(matches!(err, CustomerError::DuplicateCustomer { .. }));
    assert!(err.to_string().starts_with("customer already exists"));

    let first = registry.search_customer("Sabine", "Mustermann").unwrap();
    assert_eq!(first.first_name, "Sabine");
    assert_eq!(first.last_name, "Mustermann");
    assert_eq!(registry.search_customers_by_name("Sabine", "Mustermann").len(), 1);
}

#[test]
fn second_customer_with_different_name_can_be_found() {
    let mut registry = registry_with(&[("Sabine", "Mustermann")]);

    registry.add_customer("Max", "Mustermann", default_birthday()).unwrap();

    assert!(registry.search_customer("Max", "Mustermann").is_some());
    assert_eq!(registry.search_customers().len(), 2);
}

#[test]
fn no_customers_exist() {
    let registry = CustomerRegistry::new();

    assert!(registry.search_customers().is_empty());
    assert!(registry.search_customer("Rose", "Smith").is_none());
}

#[test]
fn search_all_customers() {
    let registry = registry_with(&[
        ("Sabine", "Mustermann"),
        ("Rose", "Smith"),
        ("Max", "Mustermann"),
    ]);

    let all = registry.search_customers();

    assert_eq!(all.len(), 3);
    let order: Vec<&str> = all.iter().map(|c| c.first_name.as_str()).collect();
    assert_eq!(order, vec!["Sabine", "Rose", "Max"]);
}

#[test]
fn search_customers_by_name() {
    let registry = registry_with(&[
        ("Sabine", "Mustermann"),
        ("Rose", "Smith"),
        ("Max", "Mustermann"),
    ]);

    assert_eq!(registry.search_customers_by_name("Sabine", "Mustermann").len(), 1);
    assert_eq!(registry.search_customers_by_name("John", "Doe").len(), 0);
}

#[test]
fn customer_not_found_after_removal() {
    let mut registry = registry_with(&[("Sabine", "Mustermann"), ("Rose", "Smith")]);

    registry.remove_customer("Rose", "Smith", default_birthday());

    assert!(registry.search_customer("Rose", "Smith").is_none());
    assert_eq!(registry.search_customers().len(), 1);
}

#[test]
fn removal_with_other_birthday_keeps_customer() {
    let mut registry = registry_with(&[("Rose", "Smith")]);
    let other = NaiveDate::from_ymd_opt(2001, 12, 24).unwrap();

    registry.remove_customer("Rose", "Smith", other);

    assert!(registry.search_customer("Rose", "Smith").is_some());
}

#[test]
fn customer_count_tracks_adds_and_removals() {
    let mut registry = CustomerRegistry::new();
    let names = [("Sabine", "Mustermann"), ("Rose", "Smith"), ("Max", "Mustermann")];

    let mut added = 0;
    for (first, last) in names.iter().chain(names.iter()) {
        if registry.add_customer(first, last, default_birthday()).is_ok() {
            added += 1;
        }
    }
    registry.remove_customer("Max", "Mustermann", default_birthday());

    assert_eq!(added, 3);
    assert_eq!(registry.search_customers().len(), added - 1);
}

#[test]
fn derived_fields() {
    let registry = registry_with(&[("Sabine", "Mustermann")]);

    let customer = registry.search_customer("Sabine", "Mustermann").unwrap();

    assert_eq!(customer.email().as_str(), "sabine.mustermann@mybank.com");
    assert_eq!(customer.full_name(), "sabine Mustermann");
}
