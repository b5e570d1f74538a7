use clap::Parser;
use pos_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the report has already been rendered by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("POS Analyzer - Sales Report Cleaner");
    println!("===================================");
    println!();
    println!("Clean semi-structured point-of-sale CSV exports and produce ranked");
    println!("sales summaries, excluding payment, category and subtotal rows.");
    println!();
    println!("USAGE:");
    println!("    pos-analyzer <COMMAND> [OPTIONS] <FILE>");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Print the sales report with totals and top sellers");
    println!("    chart       Print a horizontal bar chart of top sellers");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze a monthly export with the default top 5 listing:");
    println!("    pos-analyzer analyze data/report-month-2026-01.csv");
    println!();
    println!("    # Top 10 ranking with extra exclusion rules:");
    println!("    pos-analyzer analyze --top 10 -x pfand -x gutschein data/report.csv");
    println!();
    println!("    # Bar chart of the top 10 items:");
    println!("    pos-analyzer chart data/report-month-2026-01.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    pos-analyzer <COMMAND> --help");
}
