use std::str::FromStr;

use anyhow::{Error, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl FromStr for UnitSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => bail!("unknown unit system: {}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!("IMPERIAL".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
    }

    #[test]
    fn rejects_unknown_system() {
        assert!("kelvin".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn as_str_parses_back() {
        for system in [UnitSystem::Metric, UnitSystem::Imperial] {
            assert_eq!(system.as_str().parse::<UnitSystem>().unwrap(), system);
        }
    }
}
