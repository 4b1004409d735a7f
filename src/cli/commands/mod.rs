//! Command implementations for the techdesk CLI
//!
//! Each subcommand lives in its own module; `shared` holds the logging
//! setup and database helpers they have in common.

pub mod console;
pub mod distance;
pub mod list;
pub mod load;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for techdesk
///
/// Dispatches to the subcommand handler selected on the command line.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Some(Commands::Console(console_args)) => console::run_console(console_args),
        Some(Commands::Load(load_args)) => load::run_load(load_args),
        Some(Commands::List(list_args)) => list::run_list(list_args),
        Some(Commands::Distance(distance_args)) => distance::run_distance(distance_args),
        None => Err(Error::configuration("No command specified".to_string())),
    }
}
