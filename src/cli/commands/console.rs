//! Interactive console command
//!
//! The menu loop a technician drives for a whole session: inspect records,
//! flag machines for repair, run repairs and check distances. Errors from
//! any menu action are printed and the loop continues; only I/O failure on
//! stdin/stdout ends the session early.

use super::shared;
use crate::app::services::geo::haversine;
use crate::app::services::loader;
use crate::app::services::repair::RepairWorkflow;
use crate::app::services::store::Database;
use crate::cli::args::ConsoleArgs;
use crate::cli::input;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

const MENU_ENTRIES: usize = 10;

/// Console command runner
pub fn run_console(args: ConsoleArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level());
    args.validate()?;

    let config = Config::new(
        Some(args.database.clone()),
        args.data_dir.clone(),
        Some(args.unit),
    );
    config.validate()?;

    let mut db = shared::open_database(&config.database_path)?;

    if config.data_dir.is_some() {
        load_data_files(&mut db, &config)?;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut workflow = RepairWorkflow::new();

    println!("{}", "Techdesk - Repair Shop Console".bold());

    loop {
        print_menu();
        let choice = input::prompt_menu_selection(
            &format!("Select an option [1-{}]: ", MENU_ENTRIES),
            MENU_ENTRIES,
        )?;

        let outcome = match choice {
            1 => view_inventory(&db),
            2 => view_customers(&db),
            3 => view_machines(&db),
            4 => view_models(&db),
            5 => flag_machines(&mut db, &workflow, &mut rng),
            6 => view_needing_repair(&db, &workflow),
            7 => repair_machine(&mut db, &mut workflow),
            8 => view_service_history(&workflow),
            9 => customer_distance(&db, &config),
            _ => break,
        };

        // Menu actions never end the session; report and re-prompt.
        if let Err(e) = outcome {
            println!("{}", format!("Error: {}", e).red());
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Reset the store and bulk-load the configured data files
fn load_data_files(db: &mut Database, config: &Config) -> Result<()> {
    let confirmed = input::prompt_confirmation(
        "Loading data files destroys all existing records. Continue?",
        false,
    )?;
    if !confirmed {
        println!("Keeping existing records; data files not loaded.");
        return Ok(());
    }

    db.reset()?;

    // Config::validate guarantees the three paths are present.
    let inventory_file = config
        .inventory_file()
        .ok_or_else(|| Error::configuration("No data directory configured".to_string()))?;
    let customers_file = config
        .customers_file()
        .ok_or_else(|| Error::configuration("No data directory configured".to_string()))?;
    let machines_file = config
        .machines_file()
        .ok_or_else(|| Error::configuration("No data directory configured".to_string()))?;

    let items = db.load_inventory(&loader::load_inventory_records(&inventory_file)?)?;
    let customers = db.load_customers(&loader::load_customer_records(&customers_file)?)?;
    let machines = db.load_machines(&loader::load_machine_records(&machines_file)?)?;

    info!(items, customers, machines, "data files loaded");
    println!(
        "Loaded {} inventory parts, {} customers, {} machines.",
        items, customers, machines
    );
    Ok(())
}

fn print_menu() {
    println!();
    println!("{}", "What would you like to do?".bold());
    println!("  1. View inventory");
    println!("  2. View customers");
    println!("  3. View machines");
    println!("  4. View machine models");
    println!("  5. Flag random machines for repair");
    println!("  6. View machines needing repair");
    println!("  7. Repair a machine");
    println!("  8. View service history");
    println!("  9. Distance between two customers");
    println!(" 10. Exit");
}

fn view_inventory(db: &Database) -> Result<()> {
    let filter = input::prompt_line("Machine type filter (blank for all): ")?;
    let items = if filter.is_empty() {
        db.inventory().list(None)?
    } else {
        db.inventory().list(Some(&filter))?
    };
    shared::print_inventory(&items);
    Ok(())
}

fn view_customers(db: &Database) -> Result<()> {
    shared::print_customers(&db.customers().list()?);
    Ok(())
}

fn view_machines(db: &Database) -> Result<()> {
    shared::print_machines_with_customer(&db.machines().list_with_customer()?);
    Ok(())
}

fn view_models(db: &Database) -> Result<()> {
    shared::print_models(&db.machines().distinct_models()?);
    Ok(())
}

fn flag_machines(db: &mut Database, workflow: &RepairWorkflow, rng: &mut StdRng) -> Result<()> {
    let flagged = workflow.generate_machine_issues(db, rng)?;
    if flagged.is_empty() {
        println!("No machines on file; nothing to flag.");
    } else {
        let ids: Vec<String> = flagged.iter().map(|id| id.to_string()).collect();
        println!(
            "{}",
            format!("Flagged {} machine(s) for repair: {}", flagged.len(), ids.join(", ")).yellow()
        );
    }
    Ok(())
}

fn view_needing_repair(db: &Database, workflow: &RepairWorkflow) -> Result<()> {
    shared::print_machine_rows(&workflow.machines_needing_repair(db)?);
    Ok(())
}

/// Walk one repair attempt: pick a machine, pick a part, commit
fn repair_machine(db: &mut Database, workflow: &mut RepairWorkflow) -> Result<()> {
    let needing = workflow.machines_needing_repair(db)?;
    if needing.is_empty() {
        println!("No machines need repair right now.");
        return Ok(());
    }
    shared::print_machine_rows(&needing);

    let machine_id = input::prompt_id("Machine id to repair: ")?;
    let mut ctx = workflow.begin_repair(db, machine_id)?;

    let candidates = workflow.candidate_items(db, &ctx)?;
    if candidates.is_empty() {
        println!(
            "No parts on file for machine type '{}'.",
            ctx.machine_type()
        );
        return Ok(());
    }
    println!("Parts for {} machines:", ctx.machine_type());
    shared::print_inventory(&candidates);

    let item_id = input::prompt_id("Part id to use: ")?;
    let quantity = input::prompt_id("Quantity to use: ")?;

    workflow.choose_item(db, &mut ctx, item_id, quantity)?;
    println!(
        "{}",
        format!(
            "Machine {} repaired using {} unit(s) of part {}.",
            machine_id, quantity, item_id
        )
        .green()
    );
    Ok(())
}

fn view_service_history(workflow: &RepairWorkflow) -> Result<()> {
    shared::print_service_history(workflow.service_history());
    Ok(())
}

fn customer_distance(db: &Database, config: &Config) -> Result<()> {
    let customer_a = input::prompt_id("First customer id: ")?;
    let customer_b = input::prompt_id("Second customer id: ")?;

    let point_a = db.customers().coordinates(customer_a)?;
    let point_b = db.customers().coordinates(customer_b)?;
    let distance = haversine(point_a, point_b, config.default_unit)?;

    println!(
        "Distance between customer {} and customer {}: {:.2} {}",
        customer_a,
        customer_b,
        distance,
        config.default_unit.suffix()
    );
    Ok(())
}
