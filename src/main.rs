use clap::Parser;
use std::process;
use techdesk::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Techdesk - Repair Shop Technician Console");
    println!("=========================================");
    println!();
    println!("Track inventory parts, customers and customer-owned machines,");
    println!("flag machines for repair, run repairs and compute distances");
    println!("between customer sites.");
    println!();
    println!("USAGE:");
    println!("    techdesk <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    console     Run the interactive technician console (main command)");
    println!("    load        Bulk-load data files into the store");
    println!("    list        List stored records in human or JSON form");
    println!("    distance    Distance between two customer sites");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Start a console session against the default database:");
    println!("    techdesk console");
    println!();
    println!("    # Reset the store and load fresh data files, deterministically seeded:");
    println!("    techdesk console --data-dir ./data --seed 42");
    println!();
    println!("    # Bulk-load without entering the console:");
    println!("    techdesk load --inventory inventory.txt --customers customers.txt \\");
    println!("                  --machines machines.txt --reset");
    println!();
    println!("    # Machine listing for scripting:");
    println!("    techdesk list machines --format json");
    println!();
    println!("    # Distance between two customers in kilometers:");
    println!("    techdesk distance 1 2 --unit km");
    println!();
    println!("For detailed help on any command, use:");
    println!("    techdesk <COMMAND> --help");
}
