use std::sync::Arc;

use chrono::NaiveDate;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use customer_registry::{CustomerCommand, CustomerRegistry, RegistryMetrics};

#[derive(serde::Serialize)]
struct CustomerView {
    first_name: String,
    last_name: String,
    birthday: NaiveDate,
    full_name: String,
    email: String,
}

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_registry=debug")),
        )
        .init();

    tracing::info!("Starting customer registry demo");

    let metrics = Arc::new(RegistryMetrics::new()?);
    let mut registry = CustomerRegistry::with_metrics(metrics.clone());

    let birthday = NaiveDate::from_ymd_opt(1995, 1, 1)
        .ok_or_else(|| anyhow::anyhow!("invalid default birthday"))?;

    let commands = vec![
        CustomerCommand::register("Sabine", "Mustermann", birthday),
        CustomerCommand::register("Rose", "Smith", birthday),
        CustomerCommand::register("Max", "Mustermann", birthday),
        CustomerCommand::register("Sabine", "Mustermann", birthday),
        CustomerCommand::register("", "Mustermann", birthday),
        CustomerCommand::remove("Rose", "Smith", birthday),
    ];

    for command in commands {
        match registry.handle(command) {
            Ok(events) => {
                for event in events {
                    tracing::info!(
                        event_type = event.event_type(),
                        "{}",
                        serde_json::to_string(&event)?
                    );
                }
            }
            Err(e) => tracing::info!(reason = e.reason(), "Command rejected: {}", e),
        }
    }

    let found = registry.search_customers_by_name("Sabine", "Mustermann");
    tracing::info!(count = found.len(), "Searched for Sabine Mustermann");

    let views: Vec<CustomerView> = registry
        .search_customers()
        .into_iter()
        .map(|c| CustomerView {
            full_name: c.full_name(),
            email: c.email().to_string(),
            first_name: c.first_name,
            last_name: c.last_name,
            birthday: c.birthday,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&views)?);

    println!("{}", metrics.render()?);

    tracing::info!(customers = registry.len(), "Demo complete");

    Ok(())
}
