//! Shared helpers for CLI commands
//!
//! Logging setup, database access and the human-readable record tables
//! used by both the console and the list command.

use crate::app::models::{Customer, InventoryItem, Machine, MachineStatus, ServiceRecord};
use crate::app::services::store::machines::{MachineModel, MachineWithCustomer};
use crate::app::services::store::Database;
use crate::Result;
use colored::*;
use std::path::Path;
use tracing::debug;

/// Set up structured logging at the requested level
///
/// `RUST_LOG` in the environment takes precedence over the CLI verbosity
/// flags. Logs go to stderr so they never interleave with console output.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("techdesk={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Open (creating if needed) the database at the given path
pub fn open_database(path: &Path) -> Result<Database> {
    debug!(path = %path.display(), "opening database");
    Database::open(path)
}

/// Machine status colored for terminal display
pub fn colored_status(status: MachineStatus) -> ColoredString {
    match status {
        MachineStatus::Good => status.as_str().green(),
        MachineStatus::NeedRepair => status.as_str().red(),
    }
}

pub fn print_inventory(items: &[InventoryItem]) {
    if items.is_empty() {
        println!("No inventory parts on file.");
        return;
    }

    println!(
        "{}",
        format!(
            "{:>4}  {:<24} {:>9} {:>5}  {:<10} {}",
            "ID", "Name", "Price", "Qty", "Type", "Description"
        )
        .bold()
    );
    for item in items {
        println!(
            "{:>4}  {:<24} {:>9.2} {:>5}  {:<10} {}",
            item.id, item.name, item.price, item.quantity, item.machine_type, item.description
        );
    }
}

pub fn print_customers(customers: &[Customer]) {
    if customers.is_empty() {
        println!("No customers on file.");
        return;
    }

    println!(
        "{}",
        format!(
            "{:>4}  {:<24} {:<14} {:<20} {:>9} {:>10}  {}",
            "ID", "Name", "Phone", "Hours", "Lat", "Lon", "Address"
        )
        .bold()
    );
    for customer in customers {
        println!(
            "{:>4}  {:<24} {:<14} {:<20} {:>9.4} {:>10.4}  {}",
            customer.id,
            customer.name,
            customer.phone,
            customer.operating_hours,
            customer.latitude,
            customer.longitude,
            customer.address
        );
    }
}

pub fn print_machines_with_customer(rows: &[MachineWithCustomer]) {
    if rows.is_empty() {
        println!("No machines on file.");
        return;
    }

    println!(
        "{}",
        format!(
            "{:>4}  {:<14} {:<12} {:<10} {:<12} {:<12} {}",
            "ID", "Manufacturer", "Model", "Type", "Serial", "Status", "Customer"
        )
        .bold()
    );
    for row in rows {
        let m = &row.machine;
        println!(
            "{:>4}  {:<14} {:<12} {:<10} {:<12} {:<12} {}",
            m.id,
            m.manufacturer,
            m.name,
            m.machine_type,
            m.serial_number,
            colored_status(m.status),
            row.customer_name
        );
    }
}

pub fn print_machine_rows(machines: &[Machine]) {
    if machines.is_empty() {
        println!("No machines to show.");
        return;
    }

    println!(
        "{}",
        format!(
            "{:>4}  {:<14} {:<12} {:<10} {:<12} {:<12} {:>8}",
            "ID", "Manufacturer", "Model", "Type", "Serial", "Status", "Customer"
        )
        .bold()
    );
    for m in machines {
        println!(
            "{:>4}  {:<14} {:<12} {:<10} {:<12} {:<12} {:>8}",
            m.id,
            m.manufacturer,
            m.name,
            m.machine_type,
            m.serial_number,
            colored_status(m.status),
            m.customer_id
        );
    }
}

pub fn print_models(models: &[MachineModel]) {
    if models.is_empty() {
        println!("No machines on file.");
        return;
    }

    println!("{}", format!("{:<16} {}", "Manufacturer", "Model").bold());
    for model in models {
        println!("{:<16} {}", model.manufacturer, model.name);
    }
}

pub fn print_service_history(records: &[ServiceRecord]) {
    if records.is_empty() {
        println!("No repairs recorded this session.");
        return;
    }

    println!(
        "{}",
        format!(
            "{:>4}  {:>10} {:>8} {:>5}  {}",
            "#", "Machine", "Item", "Qty", "Repaired at"
        )
        .bold()
    );
    for (index, record) in records.iter().enumerate() {
        println!(
            "{:>4}  {:>10} {:>8} {:>5}  {}",
            index + 1,
            record.machine_id,
            record.item_id,
            record.quantity,
            record.repaired_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
}
