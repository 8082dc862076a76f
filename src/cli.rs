use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use feriapp::bridge::bridgerequest::BridgeRequest;

/// Finds the longest stretches of days off reachable with a few leave days.
#[derive(Parser)]
#[command(
    name = "feriapp",
    version,
    about = "Finds the best holiday bridges for the coming years"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to JSON configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a JSON bridge request; replaces the request flags below.
    #[arg(short, long, conflicts_with_all = ["budget", "city", "days_off", "years"])]
    pub request: Option<PathBuf>,

    /// Leave days to spend on each bridge.
    #[arg(short, long, default_value_t = 2)]
    pub budget: u32,

    /// City whose local holiday applies.
    #[arg(long, default_value = "")]
    pub city: String,

    /// Weekly off-days, 0=Sunday..6=Saturday, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = [0u8, 6])]
    pub days_off: Vec<u8>,

    /// Years to scan from the current one (0 means 3).
    #[arg(short, long, default_value_t = 0)]
    pub years: u32,

    /// Reference date instead of the current UTC date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl Cli {
    pub fn bridge_request(&self) -> Result<BridgeRequest> {
        match &self.request {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open request {}", path.display()))?;
                serde_json::from_reader(BufReader::new(file))
                    .with_context(|| format!("malformed request {}", path.display()))
            }
            None => Ok(BridgeRequest {
                day_of_holidays: self.budget,
                custom_holidays: Vec::new(),
                city: self.city.clone(),
                days_off: self.days_off.clone(),
                years_scope: self.years,
            }),
        }
    }
}
