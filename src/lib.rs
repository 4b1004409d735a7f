//! Techdesk Library
//!
//! A technician console for a machine repair shop. Tracks inventory parts,
//! customers and customer-owned machines in a SQLite-backed store, flags
//! machines as needing repair, consumes parts to perform repairs, and
//! computes great-circle distance between two customer locations.
//!
//! This library provides:
//! - A record store with three relational tables (inventory, customers,
//!   machines) and an explicit, destructive table reset
//! - Bulk loading of comma-delimited data files into typed records
//! - A repair workflow that atomically pairs an inventory deduction with a
//!   machine status flip and keeps an in-memory service history
//! - A haversine distance calculation in kilometers or miles
//!
//! The crate is single-threaded and synchronous by design: one session, one
//! operator, strictly request/response. There is no async runtime, no
//! background work and no shared state across callers.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod geo;
        pub mod loader;
        pub mod repair;
        pub mod store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Customer, InventoryItem, Machine, MachineStatus, ServiceRecord};
pub use app::services::geo::DistanceUnit;
pub use config::Config;

/// Result type alias for techdesk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for techdesk operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Caller supplied a value the operation cannot work with
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Lookup by identifier found nothing
    #[error("{entity} not found: id = {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Machine references a customer that does not exist
    #[error("Machine references unknown customer: customer_id = {customer_id}")]
    ForeignKeyViolation { customer_id: i64 },

    /// Repair requested more units than are on hand
    #[error(
        "Insufficient quantity for item {item_id}: requested {requested}, available {available}"
    )]
    InsufficientQuantity {
        item_id: i64,
        requested: i64,
        available: i64,
    },

    /// Repair item category does not match the machine's category
    #[error("Item type '{item_type}' does not match machine type '{machine_type}'")]
    TypeMismatch {
        item_type: String,
        machine_type: String,
    },

    /// Bulk-load record failed to parse or coerce
    #[error("Malformed record in '{file}' at line {line}: {message}")]
    MalformedRecord {
        file: String,
        line: usize,
        message: String,
    },

    /// SQLite operation failed
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading error while scanning a bulk-load file
    #[error("CSV error in file '{file}': {message}")]
    CsvReading {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not-found error for an entity lookup
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create a foreign-key violation error
    pub fn foreign_key_violation(customer_id: i64) -> Self {
        Self::ForeignKeyViolation { customer_id }
    }

    /// Create an insufficient-quantity error
    pub fn insufficient_quantity(item_id: i64, requested: i64, available: i64) -> Self {
        Self::InsufficientQuantity {
            item_id,
            requested,
            available,
        }
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(item_type: impl Into<String>, machine_type: impl Into<String>) -> Self {
        Self::TypeMismatch {
            item_type: item_type.into(),
            machine_type: machine_type.into(),
        }
    }

    /// Create a malformed-record error naming the offending line
    pub fn malformed_record(
        file: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a database error with context
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV reading error with context
    pub fn csv_reading(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvReading {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Self::Database {
            message: "SQLite operation failed".to_string(),
            source: error,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
