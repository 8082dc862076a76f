mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use feriapp::configuration::Configuration;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let configuration = match &cli.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Configuration::new(),
    };
    let request = cli.bridge_request()?;
    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());

    let planner = configuration.into_bridge_planner(today);
    let plan = planner.plan(&request)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
