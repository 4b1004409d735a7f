//! Non-interactive bulk-load command

use super::shared;
use crate::app::services::loader;
use crate::cli::args::LoadArgs;
use crate::Result;
use colored::*;
use tracing::info;

/// Load command runner
///
/// Parses all three data files before touching the store, so a malformed
/// record is caught while the database is still intact. Each file then
/// loads all-or-nothing.
pub fn run_load(args: LoadArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level());
    args.validate()?;

    let inventory_records = loader::load_inventory_records(&args.inventory)?;
    let customer_records = loader::load_customer_records(&args.customers)?;
    let machine_records = loader::load_machine_records(&args.machines)?;

    let mut db = shared::open_database(&args.database)?;
    if args.reset {
        info!("resetting store before load");
        db.reset()?;
    }

    let items = db.load_inventory(&inventory_records)?;
    let customers = db.load_customers(&customer_records)?;
    let machines = db.load_machines(&machine_records)?;

    println!(
        "{}",
        format!(
            "Loaded {} inventory parts, {} customers, {} machines into {}.",
            items,
            customers,
            machines,
            args.database.display()
        )
        .green()
    );
    Ok(())
}
