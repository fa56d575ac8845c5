//! floc: inspect the type classifier table and allocation records.

use floc::commands::{run_inspect, run_table};
use floc::config::{parse_command, Command, PROBE_ENV};

fn main() {
    floc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let env_probe = std::env::var(PROBE_ENV).ok();

    let command = match parse_command(&args, env_probe.as_deref()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run 'floc help' for usage.");
            std::process::exit(2);
        }
    };

    match command {
        Command::Table { depth } => run_table(depth),
        Command::Inspect { probe } => run_inspect(probe),
        Command::Help => print_usage(),
    }
}

fn print_usage() {
    println!("floc - type classifier and allocation record inspector");
    println!();
    println!("Usage: floc <command> [options]");
    println!();
    println!("Commands:");
    println!("  table [--depth=<0..4>]          List every registered type and its label");
    println!("  inspect [--probe=none|system]   Build allocation records for sample values");
    println!("  help                            Show this message");
    println!();
    println!("Environment:");
    println!("  {PROBE_ENV}    Default probe for 'inspect' (none or system)");
    println!("  RUST_LOG     Enable tracing output, e.g. RUST_LOG=flo_alloc=trace");
}
