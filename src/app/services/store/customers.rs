//! Customer sub-store
//!
//! Customers are read-only after load: the store offers create, fetch,
//! list and a coordinate lookup for the distance calculation.

use crate::app::models::{Customer, NewCustomer};
use crate::{Error, Result};
use rusqlite::{params, Connection, Row};

/// View over the `customers` table
pub struct CustomerStore<'a> {
    conn: &'a Connection,
}

impl<'a> CustomerStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a validated record and return its assigned identifier
    pub fn create(&self, record: &NewCustomer) -> Result<i64> {
        record.validate()?;
        self.conn
            .execute(
                "INSERT INTO customers (name, address, phone, operating_hours, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.name,
                    record.address,
                    record.phone,
                    record.operating_hours,
                    record.latitude,
                    record.longitude,
                ],
            )
            .map_err(|e| Error::database("Failed to insert customer", e))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch one customer by identifier
    pub fn get(&self, id: i64) -> Result<Customer> {
        self.conn
            .query_row("SELECT * FROM customers WHERE id = ?1", [id], map_customer)
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Error::not_found("Customer", id),
                other => Error::database("Failed to fetch customer", other),
            })
    }

    /// List all customers in identifier order
    pub fn list(&self) -> Result<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM customers ORDER BY id")
            .map_err(|e| Error::database("Failed to prepare customer query", e))?;
        let rows = stmt
            .query_map([], map_customer)
            .map_err(|e| Error::database("Failed to run customer query", e))?;
        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::database("Failed to read customer rows", e))
    }

    /// (latitude, longitude) for one customer
    pub fn coordinates(&self, id: i64) -> Result<(f64, f64)> {
        self.conn
            .query_row(
                "SELECT latitude, longitude FROM customers WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Error::not_found("Customer", id),
                other => Error::database("Failed to fetch customer coordinates", other),
            })
    }

    /// True when a customer with this identifier exists
    pub fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM customers WHERE id = ?1",
                [id],
                |row| row.get(0),
            )
            .map_err(|e| Error::database("Failed to check customer existence", e))?;
        Ok(count > 0)
    }
}

fn map_customer(row: &Row<'_>) -> std::result::Result<Customer, rusqlite::Error> {
    Ok(Customer {
        id: row.get("id")?,
        name: row.get("name")?,
        address: row.get("address")?,
        phone: row.get("phone")?,
        operating_hours: row.get("operating_hours")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}
