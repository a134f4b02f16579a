use std::str::FromStr;

use anyhow::{Error, bail};

use crate::units::{UnitSystem, round_to};

/// Display override for wind speeds reported in a metric deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindUnit {
    #[default]
    MetersPerSecond,
    KilometersPerHour,
}

impl WindUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindUnit::MetersPerSecond => "m/s",
            WindUnit::KilometersPerHour => "km/h",
        }
    }

    pub fn label(&self, unit_system: UnitSystem) -> &'static str {
        match unit_system {
            UnitSystem::Imperial => "mph",
            UnitSystem::Metric => self.as_str(),
        }
    }

    /// Re-express a stored wind speed for display. Imperial speeds are
    /// already in mph and pass through.
    pub fn display(&self, speed: f64, unit_system: UnitSystem) -> f64 {
        match (unit_system, self) {
            (UnitSystem::Metric, WindUnit::KilometersPerHour) => round_to(speed * 3.6, 1),
            _ => speed,
        }
    }
}

impl FromStr for WindUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ms" | "m/s" => Ok(WindUnit::MetersPerSecond),
            "kmh" | "km/h" => Ok(WindUnit::KilometersPerHour),
            _ => bail!("unknown wind unit: {}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmh_applies_to_metric_only() {
        let kmh = WindUnit::KilometersPerHour;
        assert_eq!(kmh.display(3.0, UnitSystem::Metric), 10.8);
        assert_eq!(kmh.display(6.7, UnitSystem::Imperial), 6.7);
        assert_eq!(kmh.label(UnitSystem::Metric), "km/h");
        assert_eq!(kmh.label(UnitSystem::Imperial), "mph");
    }

    #[test]
    fn ms_passes_through() {
        assert_eq!(WindUnit::MetersPerSecond.display(3.0, UnitSystem::Metric), 3.0);
        assert_eq!(WindUnit::MetersPerSecond.label(UnitSystem::Metric), "m/s");
    }

    #[test]
    fn parses_both_spellings() {
        assert_eq!("kmh".parse::<WindUnit>().unwrap(), WindUnit::KilometersPerHour);
        assert_eq!("km/h".parse::<WindUnit>().unwrap(), WindUnit::KilometersPerHour);
        assert_eq!("ms".parse::<WindUnit>().unwrap(), WindUnit::MetersPerSecond);
        assert!("knots".parse::<WindUnit>().is_err());
    }
}
