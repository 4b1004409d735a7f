//! Bulk loaders for comma-delimited data files
//!
//! Each entity has a fixed positional schema, one record per line:
//!
//! - inventory: `name, description, price, quantity, machine type`
//! - customer: `name, addr1, addr2, addr3, phone, hours, latitude, longitude`
//!   (the three address parts are joined into one address line)
//! - machine: `manufacturer, name, machine type, serial number, status,
//!   customer id`
//!
//! Field counts are checked exactly. An earlier rendition of the customer
//! loader located phone/hours/coordinates by negative offsets from the end
//! of the line, which silently mis-assigned columns when a record carried
//! an extra comma; the strict count check turns that into a
//! [`Error::MalformedRecord`] naming the offending line instead.
//!
//! Loaders only produce typed records; inserting them (all-or-nothing) is
//! the store's job.

use crate::app::models::{MachineStatus, NewCustomer, NewInventoryItem, NewMachine};
use crate::constants::{CUSTOMER_FIELD_COUNT, INVENTORY_FIELD_COUNT, MACHINE_FIELD_COUNT};
use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Parse an inventory data file into typed records
pub fn load_inventory_records(path: impl AsRef<Path>) -> Result<Vec<NewInventoryItem>> {
    let path = path.as_ref();
    let mut records = Vec::new();

    for (line, record) in read_records(path)? {
        records.push(parse_inventory_record(&record, path, line)?);
    }

    debug!(path = %path.display(), count = records.len(), "parsed inventory records");
    Ok(records)
}

/// Parse a customer data file into typed records
pub fn load_customer_records(path: impl AsRef<Path>) -> Result<Vec<NewCustomer>> {
    let path = path.as_ref();
    let mut records = Vec::new();

    for (line, record) in read_records(path)? {
        records.push(parse_customer_record(&record, path, line)?);
    }

    debug!(path = %path.display(), count = records.len(), "parsed customer records");
    Ok(records)
}

/// Parse a machine data file into typed records
pub fn load_machine_records(path: impl AsRef<Path>) -> Result<Vec<NewMachine>> {
    let path = path.as_ref();
    let mut records = Vec::new();

    for (line, record) in read_records(path)? {
        records.push(parse_machine_record(&record, path, line)?);
    }

    debug!(path = %path.display(), count = records.len(), "parsed machine records");
    Ok(records)
}

/// Read a file into (1-based physical line, record) pairs, skipping blank
/// lines. The line number comes from the reader's position tracking, so
/// skipped blank lines do not shift it.
fn read_records(path: &Path) -> Result<Vec<(usize, StringRecord)>> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            Error::csv_reading(path.display().to_string(), "Failed to read record", Some(e))
        })?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);
        records.push((line, record));
    }
    Ok(records)
}

fn parse_inventory_record(
    record: &StringRecord,
    path: &Path,
    line: usize,
) -> Result<NewInventoryItem> {
    check_field_count(record, INVENTORY_FIELD_COUNT, path, line)?;

    let price: f64 = parse_field(record, 2, "price", path, line)?;
    let quantity: i64 = parse_field(record, 3, "quantity", path, line)?;

    NewInventoryItem::new(
        field(record, 0),
        field(record, 1),
        price,
        quantity,
        field(record, 4),
    )
    .map_err(|e| Error::malformed_record(path.display().to_string(), line, e.to_string()))
}

fn parse_customer_record(record: &StringRecord, path: &Path, line: usize) -> Result<NewCustomer> {
    check_field_count(record, CUSTOMER_FIELD_COUNT, path, line)?;

    // Address arrives as three positional parts and is stored joined.
    let address = format!(
        "{}, {}, {}",
        field(record, 1),
        field(record, 2),
        field(record, 3)
    );
    let latitude: f64 = parse_field(record, 6, "latitude", path, line)?;
    let longitude: f64 = parse_field(record, 7, "longitude", path, line)?;

    NewCustomer::new(
        field(record, 0),
        address,
        field(record, 4),
        field(record, 5),
        latitude,
        longitude,
    )
    .map_err(|e| Error::malformed_record(path.display().to_string(), line, e.to_string()))
}

fn parse_machine_record(record: &StringRecord, path: &Path, line: usize) -> Result<NewMachine> {
    check_field_count(record, MACHINE_FIELD_COUNT, path, line)?;

    let status = MachineStatus::from_str(&field(record, 4))
        .map_err(|e| Error::malformed_record(path.display().to_string(), line, e.to_string()))?;
    let customer_id: i64 = parse_field(record, 5, "customer id", path, line)?;

    NewMachine::new(
        customer_id,
        field(record, 0),
        field(record, 1),
        field(record, 2),
        field(record, 3),
        status,
    )
    .map_err(|e| Error::malformed_record(path.display().to_string(), line, e.to_string()))
}

fn check_field_count(
    record: &StringRecord,
    expected: usize,
    path: &Path,
    line: usize,
) -> Result<()> {
    if record.len() != expected {
        return Err(Error::malformed_record(
            path.display().to_string(),
            line,
            format!("Expected {} fields, found {}", expected, record.len()),
        ));
    }
    Ok(())
}

fn field(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").to_string()
}

fn parse_field<T: FromStr>(
    record: &StringRecord,
    index: usize,
    name: &str,
    path: &Path,
    line: usize,
) -> Result<T> {
    let raw = record.get(index).unwrap_or("");
    raw.parse().map_err(|_| {
        Error::malformed_record(
            path.display().to_string(),
            line,
            format!("Invalid {} '{}'", name, raw),
        )
    })
}
