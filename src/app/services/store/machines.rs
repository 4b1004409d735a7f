//! Machine sub-store
//!
//! Machines reference their owning customer; creation checks the
//! reference explicitly and the schema foreign key backstops it. Status is
//! stored as its wire text ("Good" / "Need Repair") and parsed back
//! through [`MachineStatus`].

use crate::app::models::{Machine, MachineStatus, NewMachine};
use crate::app::services::store::CustomerStore;
use crate::{Error, Result};
use rusqlite::{params, Connection, Row};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// A machine joined with its owning customer's name, for display
#[derive(Debug, Clone, Serialize)]
pub struct MachineWithCustomer {
    pub machine: Machine,
    pub customer_name: String,
}

/// A distinct manufacturer + model pair serviced by the shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineModel {
    pub manufacturer: String,
    pub name: String,
}

/// View over the `machines` table
pub struct MachineStore<'a> {
    conn: &'a Connection,
}

impl<'a> MachineStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a validated record and return its assigned identifier.
    ///
    /// Fails with [`Error::ForeignKeyViolation`] when the referenced
    /// customer does not exist.
    pub fn create(&self, record: &NewMachine) -> Result<i64> {
        record.validate()?;
        if !CustomerStore::new(self.conn).exists(record.customer_id)? {
            return Err(Error::foreign_key_violation(record.customer_id));
        }
        self.conn
            .execute(
                "INSERT INTO machines
                     (customer_id, manufacturer, name, machine_type, serial_number, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.customer_id,
                    record.manufacturer,
                    record.name,
                    record.machine_type,
                    record.serial_number,
                    record.status.as_str(),
                ],
            )
            .map_err(|e| Error::database("Failed to insert machine", e))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch one machine by identifier
    pub fn get(&self, id: i64) -> Result<Machine> {
        self.conn
            .query_row("SELECT * FROM machines WHERE id = ?1", [id], map_machine)
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Error::not_found("Machine", id),
                other => Error::database("Failed to fetch machine", other),
            })
    }

    /// List all machines, optionally filtered by status
    pub fn list(&self, status: Option<MachineStatus>) -> Result<Vec<Machine>> {
        match status {
            Some(status) => self.query(
                "SELECT * FROM machines WHERE status = ?1 ORDER BY id",
                params![status.as_str()],
            ),
            None => self.query("SELECT * FROM machines ORDER BY id", params![]),
        }
    }

    /// List all machines joined with their owning customer's name
    pub fn list_with_customer(&self) -> Result<Vec<MachineWithCustomer>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT machines.*, customers.name AS customer_name
                 FROM machines
                 INNER JOIN customers ON machines.customer_id = customers.id
                 ORDER BY machines.id",
            )
            .map_err(|e| Error::database("Failed to prepare machine join query", e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MachineWithCustomer {
                    machine: map_machine(row)?,
                    customer_name: row.get("customer_name")?,
                })
            })
            .map_err(|e| Error::database("Failed to run machine join query", e))?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::database("Failed to read machine join rows", e))
    }

    /// Distinct manufacturer + model pairs, sorted
    pub fn distinct_models(&self) -> Result<Vec<MachineModel>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT DISTINCT manufacturer, name FROM machines
                 ORDER BY manufacturer, name",
            )
            .map_err(|e| Error::database("Failed to prepare distinct models query", e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(MachineModel {
                    manufacturer: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .map_err(|e| Error::database("Failed to run distinct models query", e))?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::database("Failed to read distinct model rows", e))
    }

    /// Set a machine's status. Atomic with respect to this single call.
    pub fn set_status(&self, id: i64, status: MachineStatus) -> Result<()> {
        let updated = self
            .conn
            .execute(
                "UPDATE machines SET status = ?1 WHERE id = ?2",
                params![status.as_str(), id],
            )
            .map_err(|e| Error::database("Failed to update machine status", e))?;
        if updated == 0 {
            return Err(Error::not_found("Machine", id));
        }
        debug!(machine_id = id, status = %status, "updated machine status");
        Ok(())
    }

    /// Total number of machines
    pub fn count(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM machines", [], |row| row.get(0))
            .map_err(|e| Error::database("Failed to count machines", e))
    }

    /// All machine identifiers in identifier order
    pub fn ids(&self) -> Result<Vec<i64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM machines ORDER BY id")
            .map_err(|e| Error::database("Failed to prepare machine id query", e))?;
        let rows = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| Error::database("Failed to run machine id query", e))?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::database("Failed to read machine ids", e))
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Machine>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| Error::database("Failed to prepare machine query", e))?;
        let rows = stmt
            .query_map(params, map_machine)
            .map_err(|e| Error::database("Failed to run machine query", e))?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::database("Failed to read machine rows", e))
    }
}

fn map_machine(row: &Row<'_>) -> std::result::Result<Machine, rusqlite::Error> {
    let status_text: String = row.get("status")?;
    let status = MachineStatus::from_str(&status_text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Machine {
        id: row.get("id")?,
        customer_id: row.get("customer_id")?,
        manufacturer: row.get("manufacturer")?,
        name: row.get("name")?,
        machine_type: row.get("machine_type")?,
        serial_number: row.get("serial_number")?,
        status,
    })
}
