//! Shared test fixtures for the record store tests

use crate::app::models::{MachineStatus, NewCustomer, NewInventoryItem, NewMachine};
use crate::app::services::store::Database;

pub mod inventory_tests;
pub mod machines_tests;

/// Fresh in-memory database
pub fn test_database() -> Database {
    Database::in_memory().unwrap()
}

pub fn sample_item(name: &str, quantity: i64, machine_type: &str) -> NewInventoryItem {
    NewInventoryItem {
        name: name.to_string(),
        description: format!("{} (test part)", name),
        price: 19.99,
        quantity,
        machine_type: machine_type.to_string(),
    }
}

pub fn sample_customer(name: &str, latitude: f64, longitude: f64) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        address: "1 Example Street, Midtown, Portham".to_string(),
        phone: "555-0100".to_string(),
        operating_hours: "Mon-Fri 8am-6pm".to_string(),
        latitude,
        longitude,
    }
}

pub fn sample_machine(customer_id: i64, machine_type: &str, status: MachineStatus) -> NewMachine {
    NewMachine {
        customer_id,
        manufacturer: "Speed Queen".to_string(),
        name: "SC60".to_string(),
        machine_type: machine_type.to_string(),
        serial_number: "SQ-88123".to_string(),
        status,
    }
}

/// Database seeded with two customers, two inventory items and three
/// machines (one already flagged for repair)
pub fn seeded_database() -> Database {
    let db = test_database();

    let c1 = db
        .customers()
        .create(&sample_customer("Lakeside Laundry", 38.8977, -77.0365))
        .unwrap();
    let c2 = db
        .customers()
        .create(&sample_customer("Harbor Cleaners", 40.7128, -74.0060))
        .unwrap();

    db.inventory()
        .create(&sample_item("Drum belt", 10, "Washer"))
        .unwrap();
    db.inventory()
        .create(&sample_item("Door gasket", 4, "Dryer"))
        .unwrap();

    db.machines()
        .create(&sample_machine(c1, "Washer", MachineStatus::Good))
        .unwrap();
    db.machines()
        .create(&sample_machine(c1, "Dryer", MachineStatus::NeedRepair))
        .unwrap();
    db.machines()
        .create(&sample_machine(c2, "Washer", MachineStatus::Good))
        .unwrap();

    db
}
