mod agents;
mod cli;
mod error;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use log::LevelFilter;
use std::process;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let outcome = if cli.all {
        workflow::execute_update_all(&cli.path)
    } else if let Some(package) = cli.package_name.as_deref() {
        workflow::execute_update(&cli.path, package)
    } else {
        eprintln!(
            "{} Either provide a package name or use --all flag",
            "Error:".red().bold()
        );
        process::exit(1);
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
