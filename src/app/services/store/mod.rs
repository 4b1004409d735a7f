//! SQLite-backed record store
//!
//! Three independent entity collections (inventory, customers, machines),
//! one relational table each, behind a single [`Database`] connection. The
//! system is single-threaded by design, so there is no pool: one
//! connection, one session, one caller.
//!
//! Identifiers are assigned by SQLite `AUTOINCREMENT`: monotonically
//! increasing, starting at 1, never reused within a database.

use crate::app::models::{NewCustomer, NewInventoryItem, NewMachine};
use crate::{Error, Result};
use rusqlite::{Connection, Transaction};
use std::path::Path;
use tracing::{debug, info, warn};

pub mod customers;
pub mod inventory;
pub mod machines;

#[cfg(test)]
pub mod tests;

pub use customers::CustomerStore;
pub use inventory::InventoryStore;
pub use machines::MachineStore;

/// Schema for the three entity tables.
///
/// `CHECK (quantity >= 0)` backstops the guarded deduction in
/// [`InventoryStore::deduct`]; the foreign key on machines backstops the
/// explicit existence check in [`MachineStore::create`].
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS inventory (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        price REAL NOT NULL CHECK (price >= 0.0),
        quantity INTEGER NOT NULL CHECK (quantity >= 0),
        machine_type TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        phone TEXT NOT NULL,
        operating_hours TEXT NOT NULL,
        latitude REAL NOT NULL,
        longitude REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS machines (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id INTEGER NOT NULL REFERENCES customers(id),
        manufacturer TEXT NOT NULL,
        name TEXT NOT NULL,
        machine_type TEXT NOT NULL,
        serial_number TEXT NOT NULL,
        status TEXT NOT NULL
    );
";

/// The record store: one SQLite connection plus typed sub-store views
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file and ensure the schema exists.
    ///
    /// Opening never destroys data; use [`Database::reset`] for a fresh
    /// session over an existing file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| Error::database(format!("Failed to open {}", path.display()), e))?;
        debug!(path = %path.display(), "opened database");
        Self::initialize(conn)
    }

    /// Open an ephemeral in-memory database (used by tests and dry runs)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::database("Failed to open in-memory database", e))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| Error::database("Failed to enable foreign keys", e))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| Error::database("Failed to create schema", e))?;
        Ok(Self { conn })
    }

    /// Drop and recreate all three tables.
    ///
    /// DESTRUCTIVE: every inventory item, customer and machine in the
    /// backing file is lost, and identifier sequences restart at 1. This is
    /// deliberately a separate operation from [`Database::open`] so that
    /// reusing a database file across sessions cannot silently wipe it.
    pub fn reset(&mut self) -> Result<()> {
        warn!("resetting database: dropping all entity tables");
        // Machines first: they reference customers.
        self.conn
            .execute_batch(
                "DROP TABLE IF EXISTS machines;
                 DROP TABLE IF EXISTS inventory;
                 DROP TABLE IF EXISTS customers;",
            )
            .map_err(|e| Error::database("Failed to drop tables", e))?;
        self.conn
            .execute_batch(SCHEMA)
            .map_err(|e| Error::database("Failed to recreate schema", e))?;
        Ok(())
    }

    /// Inventory sub-store view
    pub fn inventory(&self) -> InventoryStore<'_> {
        InventoryStore::new(&self.conn)
    }

    /// Customer sub-store view
    pub fn customers(&self) -> CustomerStore<'_> {
        CustomerStore::new(&self.conn)
    }

    /// Machine sub-store view
    pub fn machines(&self) -> MachineStore<'_> {
        MachineStore::new(&self.conn)
    }

    /// Begin a transaction spanning the whole store.
    ///
    /// Sub-store views can be built over the transaction, so multi-table
    /// mutations (the repair commit, bulk loads) apply atomically.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        self.conn
            .transaction()
            .map_err(|e| Error::database("Failed to begin transaction", e))
    }

    /// Bulk-load inventory records, all-or-nothing.
    pub fn load_inventory(&mut self, records: &[NewInventoryItem]) -> Result<usize> {
        let tx = self.transaction()?;
        for record in records {
            InventoryStore::new(&tx).create(record)?;
        }
        tx.commit()
            .map_err(|e| Error::database("Failed to commit inventory load", e))?;
        info!(count = records.len(), "loaded inventory records");
        Ok(records.len())
    }

    /// Bulk-load customer records, all-or-nothing.
    pub fn load_customers(&mut self, records: &[NewCustomer]) -> Result<usize> {
        let tx = self.transaction()?;
        for record in records {
            CustomerStore::new(&tx).create(record)?;
        }
        tx.commit()
            .map_err(|e| Error::database("Failed to commit customer load", e))?;
        info!(count = records.len(), "loaded customer records");
        Ok(records.len())
    }

    /// Bulk-load machine records, all-or-nothing.
    ///
    /// A record referencing a customer id that does not exist fails the
    /// whole load with [`Error::ForeignKeyViolation`] and leaves the
    /// machines table unchanged.
    pub fn load_machines(&mut self, records: &[NewMachine]) -> Result<usize> {
        let tx = self.transaction()?;
        for record in records {
            MachineStore::new(&tx).create(record)?;
        }
        tx.commit()
            .map_err(|e| Error::database("Failed to commit machine load", e))?;
        info!(count = records.len(), "loaded machine records");
        Ok(records.len())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}
