use std::path::PathBuf;

use chrono_tz::Tz;
use clap::Parser;
use meteobridge_weather::units::UnitSystem;

#[derive(Debug, Parser)]
pub struct Args {
    /// Captured `template.cgi` response body.
    #[arg(long)]
    pub file: PathBuf,

    #[arg(long, default_value = "metric")]
    pub unit_system: UnitSystem,

    #[arg(long, env = "TZ")]
    pub timezone: Tz,
}
