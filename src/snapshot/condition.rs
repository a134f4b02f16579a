use std::str::FromStr;

use anyhow::{Error, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    ClearNight,
    Rainy,
    Snowy,
    SnowyRainy,
    Windy,
    Fog,
    Cloudy,
    PartlyCloudy,
    Hail,
    Lightning,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::ClearNight => "clear-night",
            Condition::Rainy => "rainy",
            Condition::Snowy => "snowy",
            Condition::SnowyRainy => "snowy-rainy",
            Condition::Windy => "windy",
            Condition::Fog => "fog",
            Condition::Cloudy => "cloudy",
            Condition::PartlyCloudy => "partlycloudy",
            Condition::Hail => "hail",
            Condition::Lightning => "lightning",
        }
    }

    /// Map a forecast provider icon name. Icons without a matching condition
    /// (`tornado`, anything unknown) yield `None`.
    pub fn from_icon(icon: &str) -> Option<Condition> {
        match icon {
            "clear-day" => Some(Condition::Sunny),
            "clear-night" => Some(Condition::ClearNight),
            "rain" => Some(Condition::Rainy),
            "snow" => Some(Condition::Snowy),
            "sleet" => Some(Condition::SnowyRainy),
            "wind" => Some(Condition::Windy),
            "fog" => Some(Condition::Fog),
            "cloudy" => Some(Condition::Cloudy),
            "partly-cloudy-day" | "partly-cloudy-night" => Some(Condition::PartlyCloudy),
            "hail" => Some(Condition::Hail),
            "thunderstorm" => Some(Condition::Lightning),
            _ => None,
        }
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunny" => Ok(Condition::Sunny),
            "clear-night" => Ok(Condition::ClearNight),
            "rainy" => Ok(Condition::Rainy),
            "snowy" => Ok(Condition::Snowy),
            "snowy-rainy" => Ok(Condition::SnowyRainy),
            "windy" => Ok(Condition::Windy),
            "fog" => Ok(Condition::Fog),
            "cloudy" => Ok(Condition::Cloudy),
            "partlycloudy" => Ok(Condition::PartlyCloudy),
            "hail" => Ok(Condition::Hail),
            "lightning" => Ok(Condition::Lightning),
            _ => bail!("unknown condition: {}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForecastUpdate {
    pub condition: Option<Condition>,

    pub precip_probability: Option<u8>,
}

impl ForecastUpdate {
    /// Build an update from a provider icon and a precipitation probability
    /// expressed as a fraction in `[0, 1]`.
    pub fn from_provider(icon: Option<&str>, probability_fraction: Option<f64>) -> Self {
        let precip_probability = probability_fraction
            .filter(|p| p.is_finite())
            .map(|p| (p * 100.0).trunc().clamp(0.0, 100.0) as u8);

        Self {
            condition: icon.and_then(Condition::from_icon),
            precip_probability,
        }
    }
}
