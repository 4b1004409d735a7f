//! Application constants for techdesk
//!
//! Earth radii for the haversine calculation, fault-injection bounds,
//! machine status wire text and bulk-load field counts.

// =============================================================================
// Geographic Constants
// =============================================================================

/// Earth's mean radius in kilometers.
///
/// This exact value is load-bearing: distances must be bit-compatible with
/// earlier releases, so do not "improve" it to another published radius.
pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// Earth's mean radius in miles (same vintage as [`EARTH_RADIUS_KM`]).
pub const EARTH_RADIUS_MI: f64 = 3959.87433;

// =============================================================================
// Fault Injection
// =============================================================================

/// Upper bound on how many machines a single fault-injection pass may flag.
///
/// The actual count is drawn uniformly from 1..=min(MAX_FAULT_INJECTION,
/// total machines).
pub const MAX_FAULT_INJECTION: usize = 8;

// =============================================================================
// Record Store
// =============================================================================

/// Machine status wire values as they appear in bulk-load data files
pub mod status_text {
    pub const GOOD: &str = "Good";
    pub const NEED_REPAIR: &str = "Need Repair";
}

// =============================================================================
// Bulk Load Field Counts
// =============================================================================

/// Expected field count for an inventory record:
/// name, description, price, quantity, machine type
pub const INVENTORY_FIELD_COUNT: usize = 5;

/// Expected field count for a customer record:
/// name, three address parts, phone, operating hours, latitude, longitude
pub const CUSTOMER_FIELD_COUNT: usize = 8;

/// Expected field count for a machine record:
/// manufacturer, name, machine type, serial number, status, customer id
pub const MACHINE_FIELD_COUNT: usize = 6;

// =============================================================================
// Default Data File Names
// =============================================================================

/// File names looked up inside `--data-dir` by the console command
pub const INVENTORY_FILE_NAME: &str = "inventory.txt";
pub const CUSTOMERS_FILE_NAME: &str = "customers.txt";
pub const MACHINES_FILE_NAME: &str = "machines.txt";

/// Default SQLite database file name
pub const DEFAULT_DATABASE_FILE: &str = "techdesk.db";
