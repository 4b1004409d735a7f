//! Command-line argument definitions for techdesk
//!
//! Defines the CLI interface using the clap derive API. Each subcommand
//! carries its own argument struct with a `validate()` pass for checks
//! clap cannot express.

use crate::app::models::MachineStatus;
use crate::app::services::geo::DistanceUnit;
use crate::constants::DEFAULT_DATABASE_FILE;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the techdesk repair-shop console
///
/// Tracks inventory parts, customers and customer-owned machines, runs the
/// repair workflow and computes distances between customer sites.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "techdesk",
    version,
    about = "Technician console for a machine repair shop",
    long_about = "A single-operator console for a machine repair shop. Keeps inventory parts, \
                  customers and customer-owned machines in a SQLite-backed store, flags machines \
                  for repair, consumes parts to complete repairs, and computes great-circle \
                  distances between customer locations."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for techdesk
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the interactive technician console (default workflow)
    Console(ConsoleArgs),
    /// Bulk-load data files into the store without entering the console
    Load(LoadArgs),
    /// List stored records in human or JSON form
    List(ListArgs),
    /// Compute the distance between two customer sites
    Distance(DistanceArgs),
}

/// Arguments for the interactive console command
#[derive(Debug, Clone, Parser)]
pub struct ConsoleArgs {
    /// Path to the SQLite database file
    ///
    /// Created on first use if it does not exist.
    #[arg(
        long = "database",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE_FILE,
        help = "Path to the SQLite database file"
    )]
    pub database: PathBuf,

    /// Directory holding inventory.txt, customers.txt and machines.txt
    ///
    /// When given, the store is reset and the three files are bulk-loaded
    /// before the menu appears. Resetting destroys all existing records,
    /// so the console asks for confirmation first.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        help = "Reset the store and bulk-load data files from this directory"
    )]
    pub data_dir: Option<PathBuf>,

    /// Default unit for customer distance calculations
    #[arg(
        long = "unit",
        value_name = "UNIT",
        default_value = "miles",
        help = "Distance unit: km or miles"
    )]
    pub unit: DistanceUnit,

    /// Seed for the fault-injection random source
    ///
    /// With a fixed seed the "flag machines for repair" action selects the
    /// same machines on every run. Omit for a fresh seed per session.
    #[arg(long = "seed", value_name = "N", help = "Seed for fault injection")]
    pub seed: Option<u64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the non-interactive bulk-load command
#[derive(Debug, Clone, Parser)]
pub struct LoadArgs {
    /// Path to the SQLite database file
    #[arg(
        long = "database",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE_FILE,
        help = "Path to the SQLite database file"
    )]
    pub database: PathBuf,

    /// Inventory data file
    #[arg(long = "inventory", value_name = "FILE", help = "Inventory data file")]
    pub inventory: PathBuf,

    /// Customer data file
    #[arg(long = "customers", value_name = "FILE", help = "Customer data file")]
    pub customers: PathBuf,

    /// Machine data file
    #[arg(long = "machines", value_name = "FILE", help = "Machine data file")]
    pub machines: PathBuf,

    /// Reset the store before loading
    ///
    /// Destroys every existing record and restarts the id sequences.
    /// Without this flag the files are appended to whatever is stored.
    #[arg(long = "reset", help = "Destroy existing records before loading")]
    pub reset: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress log output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Which records to list
    #[arg(value_enum, help = "Records to list")]
    pub entity: ListEntity,

    /// Path to the SQLite database file
    #[arg(
        long = "database",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE_FILE,
        help = "Path to the SQLite database file"
    )]
    pub database: PathBuf,

    /// Filter inventory by machine-type category
    #[arg(
        long = "machine-type",
        value_name = "TYPE",
        help = "Only inventory parts for this machine type"
    )]
    pub machine_type: Option<String>,

    /// Filter machines by status
    #[arg(
        long = "status",
        value_name = "STATUS",
        help = "Only machines with this status (Good or NeedRepair)"
    )]
    pub status: Option<MachineStatus>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the distance command
#[derive(Debug, Clone, Parser)]
pub struct DistanceArgs {
    /// First customer id
    #[arg(value_name = "CUSTOMER_A", help = "First customer id")]
    pub customer_a: i64,

    /// Second customer id
    #[arg(value_name = "CUSTOMER_B", help = "Second customer id")]
    pub customer_b: i64,

    /// Path to the SQLite database file
    #[arg(
        long = "database",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE_FILE,
        help = "Path to the SQLite database file"
    )]
    pub database: PathBuf,

    /// Distance unit
    #[arg(
        long = "unit",
        value_name = "UNIT",
        default_value = "miles",
        help = "Distance unit: km or miles"
    )]
    pub unit: DistanceUnit,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Record collections the list command can print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListEntity {
    /// Inventory parts
    Inventory,
    /// Customers
    Customers,
    /// Machines with their owning customer
    Machines,
}

/// Output format options for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<Commands> {
        self.command.clone()
    }
}

impl ConsoleArgs {
    /// Validate the console command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_database_path(&self.database)?;

        if let Some(data_dir) = &self.data_dir {
            if !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data directory does not exist: {}",
                    data_dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }
}

impl LoadArgs {
    /// Validate the load command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_database_path(&self.database)?;

        for (name, path) in [
            ("Inventory", &self.inventory),
            ("Customer", &self.customers),
            ("Machine", &self.machines),
        ] {
            if !path.is_file() {
                return Err(Error::configuration(format!(
                    "{} data file does not exist: {}",
                    name,
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }
}

impl ListArgs {
    /// Validate the list command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.database.is_file() {
            return Err(Error::configuration(format!(
                "Database file does not exist: {}",
                self.database.display()
            )));
        }

        if self.machine_type.is_some() && self.entity != ListEntity::Inventory {
            return Err(Error::configuration(
                "--machine-type only applies to 'list inventory'".to_string(),
            ));
        }

        if self.status.is_some() && self.entity != ListEntity::Machines {
            return Err(Error::configuration(
                "--status only applies to 'list machines'".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

impl DistanceArgs {
    /// Validate the distance command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.database.is_file() {
            return Err(Error::configuration(format!(
                "Database file does not exist: {}",
                self.database.display()
            )));
        }

        if self.customer_a < 1 || self.customer_b < 1 {
            return Err(Error::configuration(
                "Customer ids must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// The database file itself may not exist yet, but its directory must
fn validate_database_path(path: &PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(Error::configuration(format!(
                "Database directory does not exist: {}",
                parent.display()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn console_args() -> ConsoleArgs {
        ConsoleArgs {
            database: PathBuf::from(DEFAULT_DATABASE_FILE),
            data_dir: None,
            unit: DistanceUnit::Miles,
            seed: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_console_args_validation() {
        assert!(console_args().validate().is_ok());

        let mut args = console_args();
        args.data_dir = Some(PathBuf::from("/nonexistent/data"));
        assert!(args.validate().is_err());

        let mut args = console_args();
        args.database = PathBuf::from("/nonexistent/dir/shop.db");
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_console_log_level() {
        let mut args = console_args();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_load_args_require_existing_files() {
        let dir = TempDir::new().unwrap();
        let file = |name: &str| {
            let path = dir.path().join(name);
            fs::write(&path, "").unwrap();
            path
        };

        let args = LoadArgs {
            database: dir.path().join("shop.db"),
            inventory: file("inventory.txt"),
            customers: file("customers.txt"),
            machines: file("machines.txt"),
            reset: false,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let mut missing = args.clone();
        missing.machines = dir.path().join("nope.txt");
        assert!(missing.validate().is_err());
    }

    #[test]
    fn test_list_args_filter_applicability() {
        let dir = TempDir::new().unwrap();
        let database = dir.path().join("shop.db");
        fs::write(&database, "").unwrap();

        let args = ListArgs {
            entity: ListEntity::Inventory,
            database: database.clone(),
            machine_type: Some("Washer".to_string()),
            status: None,
            format: OutputFormat::Human,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        // machine-type filter on customers is rejected
        let mut wrong = args.clone();
        wrong.entity = ListEntity::Customers;
        assert!(wrong.validate().is_err());

        // status filter belongs to machines
        let status_args = ListArgs {
            entity: ListEntity::Machines,
            database,
            machine_type: None,
            status: Some(MachineStatus::NeedRepair),
            format: OutputFormat::Json,
            verbose: 0,
        };
        assert!(status_args.validate().is_ok());
    }

    #[test]
    fn test_distance_args_validation() {
        let dir = TempDir::new().unwrap();
        let database = dir.path().join("shop.db");
        fs::write(&database, "").unwrap();

        let args = DistanceArgs {
            customer_a: 1,
            customer_b: 2,
            database,
            unit: DistanceUnit::Kilometers,
            verbose: 0,
        };
        assert!(args.validate().is_ok());

        let mut bad = args.clone();
        bad.customer_b = 0;
        assert!(bad.validate().is_err());
    }
}
