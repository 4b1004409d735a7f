//! Repair workflow
//!
//! Orchestrates a single repair attempt across the machine and inventory
//! tables and keeps the session's service history. This is the only
//! component allowed to mutate inventory quantity and machine status in
//! the same operation; the commit runs inside one SQLite transaction so
//! both writes land or neither does.
//!
//! A repair attempt moves through
//! `Selecting -> Validating -> Committing -> Done | Rejected`.
//! Fault injection ([`RepairWorkflow::generate_machine_issues`]) is a
//! standalone maintenance pass, not part of the state machine.

use crate::app::models::{InventoryItem, Machine, MachineStatus, ServiceRecord};
use crate::app::services::store::{Database, InventoryStore, MachineStore};
use crate::constants::MAX_FAULT_INJECTION;
use crate::{Error, Result};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

#[cfg(test)]
pub mod tests;

/// State of a single repair attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairState {
    /// A machine is being chosen
    Selecting,
    /// Machine resolved; a part and quantity are being validated
    Validating,
    /// Both mutations are being applied
    Committing,
    /// Repair committed and recorded
    Done,
    /// Attempt rejected; nothing was mutated
    Rejected,
}

/// Context for one repair attempt, produced by [`RepairWorkflow::begin_repair`]
#[derive(Debug, Clone)]
pub struct RepairContext {
    machine_id: i64,
    machine_type: String,
    state: RepairState,
}

impl RepairContext {
    /// Machine being repaired
    pub fn machine_id(&self) -> i64 {
        self.machine_id
    }

    /// Machine-type category that candidate parts must match
    pub fn machine_type(&self) -> &str {
        &self.machine_type
    }

    /// Current state of the attempt
    pub fn state(&self) -> RepairState {
        self.state
    }
}

/// The repair workflow service.
///
/// Owns the append-only service history for the running session. History
/// is in-memory only; it is not persisted across restarts.
#[derive(Debug, Default)]
pub struct RepairWorkflow {
    history: Vec<ServiceRecord>,
}

impl RepairWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Machines currently flagged as needing repair
    pub fn machines_needing_repair(&self, db: &Database) -> Result<Vec<Machine>> {
        db.machines().list(Some(MachineStatus::NeedRepair))
    }

    /// Start a repair attempt for a machine.
    ///
    /// Fails with [`Error::NotFound`] when the machine does not exist.
    pub fn begin_repair(&self, db: &Database, machine_id: i64) -> Result<RepairContext> {
        let machine = db.machines().get(machine_id)?;
        Ok(RepairContext {
            machine_id: machine.id,
            machine_type: machine.machine_type,
            state: RepairState::Validating,
        })
    }

    /// Inventory parts eligible for this repair (matching machine type)
    pub fn candidate_items(&self, db: &Database, ctx: &RepairContext) -> Result<Vec<InventoryItem>> {
        db.inventory().list(Some(&ctx.machine_type))
    }

    /// Consume a part to complete the repair.
    ///
    /// Validates before mutating: the item must exist, its category must
    /// match the machine's, and enough units must be on hand. On success
    /// the quantity deduction and the status flip to `Good` commit in one
    /// transaction, and exactly one [`ServiceRecord`] is appended. On any
    /// failure the context lands in `Rejected` and nothing has changed.
    pub fn choose_item(
        &mut self,
        db: &mut Database,
        ctx: &mut RepairContext,
        item_id: i64,
        quantity: i64,
    ) -> Result<()> {
        if quantity < 1 {
            return Err(Error::invalid_argument(format!(
                "Repair quantity {} must be at least 1",
                quantity
            )));
        }

        ctx.state = RepairState::Validating;

        let item = db.inventory().get(item_id)?;
        if item.machine_type != ctx.machine_type {
            ctx.state = RepairState::Rejected;
            return Err(Error::type_mismatch(item.machine_type, &ctx.machine_type));
        }

        if item.quantity < quantity {
            ctx.state = RepairState::Rejected;
            return Err(Error::insufficient_quantity(
                item_id,
                quantity,
                item.quantity,
            ));
        }

        ctx.state = RepairState::Committing;

        // Both writes or neither; the deduction re-checks quantity inside
        // the transaction.
        let tx = db.transaction()?;
        InventoryStore::new(&tx).deduct(item_id, quantity)?;
        MachineStore::new(&tx).set_status(ctx.machine_id, MachineStatus::Good)?;
        tx.commit()
            .map_err(|e| Error::database("Failed to commit repair", e))?;

        self.history.push(ServiceRecord {
            machine_id: ctx.machine_id,
            item_id,
            quantity,
            repaired_at: Utc::now(),
        });
        ctx.state = RepairState::Done;

        info!(
            machine_id = ctx.machine_id,
            item_id, quantity, "repair committed"
        );
        Ok(())
    }

    /// Flag a random subset of machines as needing repair.
    ///
    /// Selects between 1 and min(8, total machines) distinct machines
    /// without replacement and sets each to `NeedRepair` unconditionally;
    /// unselected machines are untouched. The random source is explicit so
    /// callers (and tests) can seed it. With no machines in the store this
    /// is a warned no-op.
    pub fn generate_machine_issues(
        &self,
        db: &mut Database,
        rng: &mut impl Rng,
    ) -> Result<Vec<i64>> {
        let ids = db.machines().ids()?;
        if ids.is_empty() {
            warn!("no machines in store; fault injection skipped");
            return Ok(Vec::new());
        }

        let max = ids.len().min(MAX_FAULT_INJECTION);
        let count = rng.gen_range(1..=max);
        let mut selected: Vec<i64> = ids
            .choose_multiple(rng, count)
            .copied()
            .collect();
        selected.sort_unstable();

        let tx = db.transaction()?;
        for &id in &selected {
            MachineStore::new(&tx).set_status(id, MachineStatus::NeedRepair)?;
        }
        tx.commit()
            .map_err(|e| Error::database("Failed to commit fault injection", e))?;

        info!(count = selected.len(), "flagged machines for repair");
        Ok(selected)
    }

    /// Service history in insertion order
    pub fn service_history(&self) -> &[ServiceRecord] {
        &self.history
    }
}
