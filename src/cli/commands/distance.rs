//! Distance command: great-circle distance between two customer sites

use super::shared;
use crate::app::services::geo::haversine;
use crate::cli::args::DistanceArgs;
use crate::Result;

/// Distance command runner
pub fn run_distance(args: DistanceArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level());
    args.validate()?;

    let db = shared::open_database(&args.database)?;
    let customer_a = db.customers().get(args.customer_a)?;
    let customer_b = db.customers().get(args.customer_b)?;

    let distance = haversine(customer_a.location(), customer_b.location(), args.unit)?;

    println!(
        "{} -> {}: {:.2} {}",
        customer_a.name,
        customer_b.name,
        distance,
        args.unit.suffix()
    );
    Ok(())
}
