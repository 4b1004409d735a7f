//! Tests for the repair workflow

use crate::app::services::store::tests::{
    sample_customer, sample_item, sample_machine, seeded_database, test_database,
};
use crate::app::services::store::Database;
use crate::app::models::MachineStatus;


/// Seeded database plus the machine id of the dryer flagged for repair
pub fn database_with_broken_dryer() -> (Database, i64) {
    // Machine 2 in the seeded fixture is the dryer needing repair.
    (seeded_database(), 2)
}
