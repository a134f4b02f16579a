pub mod meteobridge;
pub mod sensor;
pub mod snapshot;
pub mod units;
