mod compass;
mod conversion;
mod unit_system;
mod wind_unit;

pub use compass::*;
pub use conversion::*;
pub use unit_system::*;
pub use wind_unit::*;
