//! Inventory sub-store
//!
//! Create, fetch and list inventory parts, and apply the guarded quantity
//! deduction used by the repair workflow. Quantity can never go below
//! zero: the deduction statement refuses to match a row it would make
//! negative, and the schema `CHECK` constraint backstops it.

use crate::app::models::{InventoryItem, NewInventoryItem};
use crate::{Error, Result};
use rusqlite::{params, Connection, Row};
use tracing::debug;

/// View over the `inventory` table
pub struct InventoryStore<'a> {
    conn: &'a Connection,
}

impl<'a> InventoryStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a validated record and return its assigned identifier
    pub fn create(&self, record: &NewInventoryItem) -> Result<i64> {
        record.validate()?;
        self.conn
            .execute(
                "INSERT INTO inventory (name, description, price, quantity, machine_type)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.name,
                    record.description,
                    record.price,
                    record.quantity,
                    record.machine_type,
                ],
            )
            .map_err(|e| Error::database("Failed to insert inventory item", e))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch one item by identifier
    pub fn get(&self, id: i64) -> Result<InventoryItem> {
        self.conn
            .query_row("SELECT * FROM inventory WHERE id = ?1", [id], map_item)
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Error::not_found("Inventory item", id),
                other => Error::database("Failed to fetch inventory item", other),
            })
    }

    /// List all items, optionally filtered by machine-type category
    pub fn list(&self, machine_type: Option<&str>) -> Result<Vec<InventoryItem>> {
        match machine_type {
            Some(machine_type) => self.query(
                "SELECT * FROM inventory WHERE machine_type = ?1 ORDER BY id",
                params![machine_type],
            ),
            None => self.query("SELECT * FROM inventory ORDER BY id", params![]),
        }
    }

    /// Quantity currently on hand for an item
    pub fn available_quantity(&self, id: i64) -> Result<i64> {
        self.conn
            .query_row(
                "SELECT quantity FROM inventory WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Error::not_found("Inventory item", id),
                other => Error::database("Failed to fetch inventory quantity", other),
            })
    }

    /// Deduct `quantity` units from an item, atomically.
    ///
    /// The UPDATE only matches when enough stock is on hand, so a request
    /// exceeding the current quantity changes nothing and reports
    /// [`Error::InsufficientQuantity`] with the amount actually available.
    pub fn deduct(&self, id: i64, quantity: i64) -> Result<()> {
        if quantity < 1 {
            return Err(Error::invalid_argument(format!(
                "Deduction quantity {} must be at least 1",
                quantity
            )));
        }

        let updated = self
            .conn
            .execute(
                "UPDATE inventory SET quantity = quantity - ?1
                 WHERE id = ?2 AND quantity >= ?1",
                params![quantity, id],
            )
            .map_err(|e| Error::database("Failed to deduct inventory quantity", e))?;

        if updated == 0 {
            // Distinguish a missing item from insufficient stock.
            let available = self.available_quantity(id)?;
            return Err(Error::insufficient_quantity(id, quantity, available));
        }

        debug!(item_id = id, quantity, "deducted inventory quantity");
        Ok(())
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<InventoryItem>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| Error::database("Failed to prepare inventory query", e))?;
        let rows = stmt
            .query_map(params, map_item)
            .map_err(|e| Error::database("Failed to run inventory query", e))?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::database("Failed to read inventory rows", e))
    }
}

fn map_item(row: &Row<'_>) -> std::result::Result<InventoryItem, rusqlite::Error> {
    Ok(InventoryItem {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        price: row.get("price")?,
        quantity: row.get("quantity")?,
        machine_type: row.get("machine_type")?,
    })
}
