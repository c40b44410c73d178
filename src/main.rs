//! greedy-rules CLI - Command-line interface
//!
//! Commands:
//!   induce   - Generate decision rules from delimited tables
//!   schema   - Print JSON schema for config and output types
//!   version  - Print version

mod cli;

use greedy_rules::VERSION;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "induce" => cli::cmd_induce(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("greedy-rules {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings only)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!(
        r#"
greedy-rules - Minimal decision rules from decision tables

USAGE:
    greedy-rules <COMMAND> [OPTIONS]

COMMANDS:
    induce <table.csv>...            Generate decision rules for each table
    schema [name]                    Print JSON schema (config, reader, rules)
    version                          Print version

OPTIONS:
    --decision, -d <column>          Decision column (default: last column)
    --kind, -k <kind>                decision-table | information-system
                                      (default: decision-table)
    --config, -c <config.yaml>       Induction config (tie_break, min_support, parallel)
    --delimiter <char>               Field delimiter (default: ','; '\t' for tabs)
    --no-header                      First line is data; columns are named f1..fN
    --sequential                     Disable parallel induction
    --json | --yaml                  Structured output format
    --output, -o <file>              Output file (default: stdout)

ENVIRONMENT:
    RUST_LOG                          Log filter, e.g. RUST_LOG=greedy_rules=debug

EXAMPLES:
    greedy-rules induce weather.csv
    greedy-rules induce survey.csv --kind information-system --json
    greedy-rules induce data.tsv --delimiter '\t' --decision class -o rules.yaml --yaml
"#
    );
}
