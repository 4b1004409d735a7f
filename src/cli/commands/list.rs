//! List command: print stored records in human or JSON form

use super::shared;
use crate::cli::args::{ListArgs, ListEntity, OutputFormat};
use crate::{Error, Result};
use serde::Serialize;

/// List command runner
pub fn run_list(args: ListArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level());
    args.validate()?;

    let db = shared::open_database(&args.database)?;

    match (args.entity, args.format) {
        (ListEntity::Inventory, OutputFormat::Human) => {
            shared::print_inventory(&db.inventory().list(args.machine_type.as_deref())?);
        }
        (ListEntity::Inventory, OutputFormat::Json) => {
            print_json(&db.inventory().list(args.machine_type.as_deref())?)?;
        }
        (ListEntity::Customers, OutputFormat::Human) => {
            shared::print_customers(&db.customers().list()?);
        }
        (ListEntity::Customers, OutputFormat::Json) => {
            print_json(&db.customers().list()?)?;
        }
        (ListEntity::Machines, OutputFormat::Human) => {
            if let Some(status) = args.status {
                shared::print_machine_rows(&db.machines().list(Some(status))?);
            } else {
                shared::print_machines_with_customer(&db.machines().list_with_customer()?);
            }
        }
        (ListEntity::Machines, OutputFormat::Json) => {
            if let Some(status) = args.status {
                print_json(&db.machines().list(Some(status))?)?;
            } else {
                print_json(&db.machines().list_with_customer()?)?;
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| Error::configuration(format!("Failed to serialize records: {}", e)))?;
    println!("{}", json);
    Ok(())
}
