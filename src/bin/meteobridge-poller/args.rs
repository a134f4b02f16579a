use chrono_tz::Tz;
use clap::Parser;
use meteobridge_weather::{
    meteobridge::DEFAULT_USERNAME,
    units::{UnitSystem, WindUnit},
};

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "METEOBRIDGE_HOST")]
    pub host: String,

    #[arg(long, env = "METEOBRIDGE_USERNAME", default_value = DEFAULT_USERNAME)]
    pub username: String,

    #[arg(long, env = "METEOBRIDGE_PASSWORD")]
    pub password: String,

    #[arg(long, env = "METEOBRIDGE_USE_SSL")]
    pub use_ssl: bool,

    #[arg(long, env = "METEOBRIDGE_UNIT_SYSTEM", default_value = "metric")]
    pub unit_system: UnitSystem,

    #[arg(long, env = "TZ")]
    pub timezone: Tz,

    #[arg(long, env = "METEOBRIDGE_INTERVAL_SECS", default_value_t = 10)]
    pub interval_secs: u64,

    #[arg(long, env = "METEOBRIDGE_WIND_UNIT", default_value = "ms")]
    pub wind_unit: WindUnit,

    /// Sensor keys to report; all of them when omitted.
    #[arg(long = "sensor", value_delimiter = ',')]
    pub sensors: Vec<String>,
}
