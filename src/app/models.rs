//! Data models for the repair shop
//!
//! This module contains the core data structures for inventory parts,
//! customers, customer-owned machines and the service history kept by the
//! repair workflow. Stored entities carry the identifier assigned by the
//! record store; `New*` records are the typed inputs produced by the bulk
//! loader before an identifier exists.

use crate::constants::status_text;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Inventory
// =============================================================================

/// An inventory part held by the shop
///
/// Quantity on hand is only ever mutated by the repair workflow's deduction
/// and can never go below zero; a deduction that would violate this is
/// rejected before being applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique identifier assigned by the store (monotonic, starts at 1)
    pub id: i64,

    /// Part name (e.g. "Compressor valve")
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Unit price, non-negative
    pub price: f64,

    /// Quantity on hand, non-negative
    pub quantity: i64,

    /// Machine-type category this part can repair
    pub machine_type: String,
}

/// Typed input for creating an inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub machine_type: String,
}

impl NewInventoryItem {
    /// Create a new inventory input record with validation
    pub fn new(
        name: String,
        description: String,
        price: f64,
        quantity: i64,
        machine_type: String,
    ) -> Result<Self> {
        let item = Self {
            name,
            description,
            price,
            quantity,
            machine_type,
        };
        item.validate()?;
        Ok(item)
    }

    /// Validate field ranges and required fields
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("Item name cannot be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::invalid_argument(format!(
                "Item price {} must be a non-negative number",
                self.price
            )));
        }
        if self.quantity < 0 {
            return Err(Error::invalid_argument(format!(
                "Item quantity {} must be non-negative",
                self.quantity
            )));
        }
        if self.machine_type.trim().is_empty() {
            return Err(Error::invalid_argument("Machine type cannot be empty"));
        }
        Ok(())
    }
}

// =============================================================================
// Customers
// =============================================================================

/// A customer site. Read-only after load in this system's scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier assigned by the store
    pub id: i64,

    /// Business name
    pub name: String,

    /// Full postal address (single joined line)
    pub address: String,

    /// Contact phone number
    pub phone: String,

    /// Operating hours as free text (e.g. "Mon-Fri 8am-6pm")
    pub operating_hours: String,

    /// Site latitude in WGS84 decimal degrees
    pub latitude: f64,

    /// Site longitude in WGS84 decimal degrees
    pub longitude: f64,
}

impl Customer {
    /// Get the site location as a (latitude, longitude) pair
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Typed input for creating a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub operating_hours: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewCustomer {
    /// Create a new customer input record with validation
    pub fn new(
        name: String,
        address: String,
        phone: String,
        operating_hours: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let customer = Self {
            name,
            address,
            phone,
            operating_hours,
            latitude,
            longitude,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Validate coordinate ranges and required fields
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("Customer name cannot be empty"));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::invalid_argument(format!(
                "Invalid latitude {}: must be between -90 and 90 degrees",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::invalid_argument(format!(
                "Invalid longitude {}: must be between -180 and 180 degrees",
                self.longitude
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Machines
// =============================================================================

/// Operational status of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineStatus {
    /// Machine is operating normally
    Good,
    /// Machine has been flagged for repair
    NeedRepair,
}

impl MachineStatus {
    /// Wire text as stored in the database and data files
    pub fn as_str(self) -> &'static str {
        match self {
            MachineStatus::Good => status_text::GOOD,
            MachineStatus::NeedRepair => status_text::NEED_REPAIR,
        }
    }
}

impl FromStr for MachineStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            status_text::GOOD => Ok(MachineStatus::Good),
            // "NeedRepair" tolerated for hand-edited data files
            status_text::NEED_REPAIR | "NeedRepair" => Ok(MachineStatus::NeedRepair),
            other => Err(Error::invalid_argument(format!(
                "Invalid machine status '{}': must be '{}' or '{}'",
                other,
                status_text::GOOD,
                status_text::NEED_REPAIR
            ))),
        }
    }
}

impl std::fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer-owned machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Unique identifier assigned by the store
    pub id: i64,

    /// Owning customer (must reference an existing customer)
    pub customer_id: i64,

    /// Manufacturer name
    pub manufacturer: String,

    /// Model name
    pub name: String,

    /// Machine-type category matched against inventory parts
    pub machine_type: String,

    /// Manufacturer serial number
    pub serial_number: String,

    /// Current operational status
    pub status: MachineStatus,
}

/// Typed input for creating a machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMachine {
    pub customer_id: i64,
    pub manufacturer: String,
    pub name: String,
    pub machine_type: String,
    pub serial_number: String,
    pub status: MachineStatus,
}

impl NewMachine {
    /// Create a new machine input record with validation
    pub fn new(
        customer_id: i64,
        manufacturer: String,
        name: String,
        machine_type: String,
        serial_number: String,
        status: MachineStatus,
    ) -> Result<Self> {
        let machine = Self {
            customer_id,
            manufacturer,
            name,
            machine_type,
            serial_number,
            status,
        };
        machine.validate()?;
        Ok(machine)
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<()> {
        if self.customer_id < 1 {
            return Err(Error::invalid_argument(format!(
                "Invalid customer id {}: identifiers start at 1",
                self.customer_id
            )));
        }
        if self.manufacturer.trim().is_empty() {
            return Err(Error::invalid_argument("Manufacturer cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("Machine name cannot be empty"));
        }
        if self.machine_type.trim().is_empty() {
            return Err(Error::invalid_argument("Machine type cannot be empty"));
        }
        if self.serial_number.trim().is_empty() {
            return Err(Error::invalid_argument("Serial number cannot be empty"));
        }
        Ok(())
    }
}

// =============================================================================
// Service History
// =============================================================================

/// One completed repair: which machine, which part, how many units, when.
///
/// Records are append-only and live in memory for the running session;
/// persisting them across restarts would be a documented extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Machine that was repaired
    pub machine_id: i64,

    /// Inventory item consumed
    pub item_id: i64,

    /// Units consumed
    pub quantity: i64,

    /// Timestamp of the repair commit
    pub repaired_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_item() -> NewInventoryItem {
        NewInventoryItem {
            name: "Compressor valve".to_string(),
            description: "Replacement valve for R-series compressors".to_string(),
            price: 24.99,
            quantity: 12,
            machine_type: "Compressor".to_string(),
        }
    }

    fn create_test_customer() -> NewCustomer {
        NewCustomer {
            name: "Lakeside Laundry".to_string(),
            address: "4 Mill Road, Dockside, Portham".to_string(),
            phone: "555-0142".to_string(),
            operating_hours: "Mon-Sat 7am-9pm".to_string(),
            latitude: 38.8977,
            longitude: -77.0365,
        }
    }

    fn create_test_machine() -> NewMachine {
        NewMachine {
            customer_id: 1,
            manufacturer: "Speed Queen".to_string(),
            name: "SC60".to_string(),
            machine_type: "Washer".to_string(),
            serial_number: "SQ-88123".to_string(),
            status: MachineStatus::Good,
        }
    }

    mod inventory_tests {
        use super::*;

        #[test]
        fn test_valid_item() {
            let item = create_test_item();
            assert!(item.validate().is_ok());
        }

        #[test]
        fn test_negative_price_rejected() {
            let mut item = create_test_item();
            item.price = -0.01;
            assert!(item.validate().is_err());
        }

        #[test]
        fn test_non_finite_price_rejected() {
            let mut item = create_test_item();
            item.price = f64::NAN;
            assert!(item.validate().is_err());

            item.price = f64::INFINITY;
            assert!(item.validate().is_err());
        }

        #[test]
        fn test_negative_quantity_rejected() {
            let mut item = create_test_item();
            item.quantity = -1;
            assert!(item.validate().is_err());
        }

        #[test]
        fn test_required_fields() {
            let mut item = create_test_item();
            item.name = "  ".to_string();
            assert!(item.validate().is_err());

            let mut item = create_test_item();
            item.machine_type = "".to_string();
            assert!(item.validate().is_err());
        }
    }

    mod customer_tests {
        use super::*;

        #[test]
        fn test_valid_customer() {
            assert!(create_test_customer().validate().is_ok());
        }

        #[test]
        fn test_coordinate_ranges() {
            let mut customer = create_test_customer();
            customer.latitude = 90.5;
            assert!(customer.validate().is_err());

            customer.latitude = -91.0;
            assert!(customer.validate().is_err());

            customer.latitude = 38.8977;
            customer.longitude = 180.5;
            assert!(customer.validate().is_err());

            customer.longitude = -181.0;
            assert!(customer.validate().is_err());
        }

        #[test]
        fn test_location_pair() {
            let customer = Customer {
                id: 7,
                name: "Lakeside Laundry".to_string(),
                address: "4 Mill Road".to_string(),
                phone: "555-0142".to_string(),
                operating_hours: "daily".to_string(),
                latitude: 38.8977,
                longitude: -77.0365,
            };
            assert_eq!(customer.location(), (38.8977, -77.0365));
        }
    }

    mod machine_tests {
        use super::*;

        #[test]
        fn test_valid_machine() {
            assert!(create_test_machine().validate().is_ok());
        }

        #[test]
        fn test_customer_id_must_be_positive() {
            let mut machine = create_test_machine();
            machine.customer_id = 0;
            assert!(machine.validate().is_err());
        }

        #[test]
        fn test_required_fields() {
            let mut machine = create_test_machine();
            machine.serial_number = "".to_string();
            assert!(machine.validate().is_err());
        }
    }

    mod status_tests {
        use super::*;

        #[test]
        fn test_status_from_str() {
            assert_eq!(
                MachineStatus::from_str("Good").unwrap(),
                MachineStatus::Good
            );
            assert_eq!(
                MachineStatus::from_str("Need Repair").unwrap(),
                MachineStatus::NeedRepair
            );
            assert_eq!(
                MachineStatus::from_str(" NeedRepair ").unwrap(),
                MachineStatus::NeedRepair
            );
            assert!(MachineStatus::from_str("Broken").is_err());
        }

        #[test]
        fn test_status_round_trip() {
            for status in [MachineStatus::Good, MachineStatus::NeedRepair] {
                assert_eq!(
                    MachineStatus::from_str(status.as_str()).unwrap(),
                    status
                );
            }
        }

        #[test]
        fn test_status_display() {
            assert_eq!(format!("{}", MachineStatus::Good), "Good");
            assert_eq!(format!("{}", MachineStatus::NeedRepair), "Need Repair");
        }
    }
}
