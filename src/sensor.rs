//! Sensor descriptors for exposing snapshot keys to a host platform.

use anyhow::{Result, bail};

use crate::snapshot::{MeasurementSnapshot, Value};
use crate::units::{UnitSystem, WindUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    WindSpeed,
    RainVolume,
    RainRate,
    Pressure,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorDescriptor {
    pub key: &'static str,

    pub name: &'static str,

    pub quantity: Quantity,

    pub metric_unit: &'static str,

    pub imperial_unit: &'static str,
}

const fn sensor(
    key: &'static str,
    name: &'static str,
    quantity: Quantity,
    metric_unit: &'static str,
    imperial_unit: &'static str,
) -> SensorDescriptor {
    SensorDescriptor {
        key,
        name,
        quantity,
        metric_unit,
        imperial_unit,
    }
}

const fn temperature(key: &'static str, name: &'static str) -> SensorDescriptor {
    sensor(key, name, Quantity::Temperature, "°C", "°F")
}

const fn wind(key: &'static str, name: &'static str) -> SensorDescriptor {
    sensor(key, name, Quantity::WindSpeed, "m/s", "mph")
}

pub const SENSORS: &[SensorDescriptor] = &[
    temperature("temperature", "Temperature"),
    temperature("temphigh", "Temp High Today"),
    temperature("templow", "Temp Low Today"),
    temperature("in_temperature", "Indoor Temp"),
    temperature("dewpoint", "Dewpoint"),
    temperature("windchill", "Wind Chill"),
    temperature("heatindex", "Heatindex"),
    temperature("feels_like", "Feels Like"),
    wind("windspeedavg", "Wind Speed Avg"),
    wind("windspeed", "Wind Speed"),
    sensor("windbearing", "Wind Bearing", Quantity::Other, "°", "°"),
    sensor("winddirection", "Wind Direction", Quantity::Other, "", ""),
    wind("windgust", "Wind Gust"),
    sensor("raintoday", "Rain today", Quantity::RainVolume, "mm", "in"),
    sensor("rainrate", "Rain rate", Quantity::RainRate, "mm/h", "in/h"),
    sensor("humidity", "Humidity", Quantity::Other, "%", "%"),
    sensor("in_humidity", "Indoor Hum", Quantity::Other, "%", "%"),
    sensor("pressure", "Pressure", Quantity::Pressure, "hPa", "inHg"),
    sensor("uvindex", "UV Index", Quantity::Other, "UV index", "UV index"),
    sensor("solarrad", "Solar Radiation", Quantity::Other, "W/m2", "W/m2"),
    sensor("condition", "Condition", Quantity::Other, "", ""),
    sensor("forecast", "Forecast", Quantity::Other, "", ""),
    temperature("temp_mmin", "Temp Month Min"),
    temperature("temp_mmax", "Temp Month Max"),
    temperature("temp_ymin", "Temp Year Min"),
    temperature("temp_ymax", "Temp Year Max"),
    wind("windspeed_mmax", "Wind Speed Month Max"),
    wind("windspeed_ymax", "Wind Speed Year Max"),
    sensor("rain_mmax", "Rain Month Max", Quantity::RainVolume, "mm", "in"),
    sensor("rain_ymax", "Rain Year Max", Quantity::RainVolume, "mm", "in"),
    sensor("rainrate_mmax", "Rain Rate Month Max", Quantity::RainRate, "mm/h", "in/h"),
    sensor("rainrate_ymax", "Rain Rate Year Max", Quantity::RainRate, "mm/h", "in/h"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarySensorDescriptor {
    pub key: &'static str,

    pub name: &'static str,
}

pub const BINARY_SENSORS: &[BinarySensorDescriptor] = &[
    BinarySensorDescriptor {
        key: "raining",
        name: "Raining",
    },
    BinarySensorDescriptor {
        key: "lowbattery",
        name: "Battery Status",
    },
    BinarySensorDescriptor {
        key: "freezing",
        name: "Freezing",
    },
];

pub fn find(key: &str) -> Option<&'static SensorDescriptor> {
    SENSORS.iter().find(|s| s.key == key)
}

pub fn find_binary(key: &str) -> Option<&'static BinarySensorDescriptor> {
    BINARY_SENSORS.iter().find(|s| s.key == key)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub sensors: Vec<&'static SensorDescriptor>,

    pub binary_sensors: Vec<&'static BinarySensorDescriptor>,
}

impl Selection {
    pub fn all() -> Self {
        Self {
            sensors: SENSORS.iter().collect(),
            binary_sensors: BINARY_SENSORS.iter().collect(),
        }
    }

    /// Resolve configured keys against both tables. No keys selects everything.
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self> {
        if keys.is_empty() {
            return Ok(Self::all());
        }

        let mut selection = Self {
            sensors: Vec::new(),
            binary_sensors: Vec::new(),
        };
        for key in keys {
            let key = key.as_ref();
            if let Some(sensor) = find(key) {
                selection.sensors.push(sensor);
            } else if let Some(binary) = find_binary(key) {
                selection.binary_sensors.push(binary);
            } else {
                bail!("unknown sensor: {key}");
            }
        }

        Ok(selection)
    }

    pub fn len(&self) -> usize {
        self.sensors.len() + self.binary_sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SensorDescriptor {
    pub fn unit(&self, unit_system: UnitSystem, wind_unit: WindUnit) -> &'static str {
        match (self.quantity, unit_system) {
            (Quantity::WindSpeed, _) => wind_unit.label(unit_system),
            (_, UnitSystem::Metric) => self.metric_unit,
            (_, UnitSystem::Imperial) => self.imperial_unit,
        }
    }

    pub fn state(&self, snapshot: &MeasurementSnapshot, wind_unit: WindUnit) -> Option<Value> {
        let value = snapshot.value(self.key)?;

        match (self.quantity, &value) {
            (Quantity::WindSpeed, Value::Number(speed)) => {
                Some(Value::Number(wind_unit.display(*speed, snapshot.unit_system)))
            }
            _ => Some(value),
        }
    }
}

impl BinarySensorDescriptor {
    pub fn state(&self, snapshot: &MeasurementSnapshot) -> Option<bool> {
        snapshot.value(self.key)?.as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::fixtures;

    #[test]
    fn every_sensor_key_is_published() {
        let values = fixtures::snapshot().values();
        for sensor in SENSORS {
            assert!(values.contains_key(sensor.key), "{} missing", sensor.key);
        }
        for binary in BINARY_SENSORS {
            assert!(values[binary.key].as_bool().is_some(), "{} is not a flag", binary.key);
        }
    }

    #[test]
    fn find_rejects_unknown_keys() {
        assert_eq!(find("pressure").map(|s| s.name), Some("Pressure"));
        assert!(find("raining").is_none());
        assert!(find("visibility").is_none());
    }

    #[test]
    fn units_follow_unit_system() {
        let pressure = find("pressure").unwrap();
        assert_eq!(pressure.unit(UnitSystem::Metric, WindUnit::default()), "hPa");
        assert_eq!(pressure.unit(UnitSystem::Imperial, WindUnit::default()), "inHg");

        let gust = find("windgust").unwrap();
        assert_eq!(gust.unit(UnitSystem::Metric, WindUnit::KilometersPerHour), "km/h");
        assert_eq!(gust.unit(UnitSystem::Imperial, WindUnit::KilometersPerHour), "mph");
    }

    #[test]
    fn wind_state_honours_kmh_override() {
        let snapshot = fixtures::snapshot();
        let avg = find("windspeedavg").unwrap();
        assert_eq!(avg.state(&snapshot, WindUnit::KilometersPerHour), Some(Value::Number(10.8)));
        assert_eq!(avg.state(&snapshot, WindUnit::MetersPerSecond), Some(Value::Number(3.0)));

        let temperature = find("temperature").unwrap();
        assert_eq!(
            temperature.state(&snapshot, WindUnit::KilometersPerHour),
            Some(Value::Number(20.5))
        );
    }

    #[test]
    fn condition_state_is_null_until_forecast_arrives() {
        let snapshot = fixtures::snapshot();
        let condition = find("condition").unwrap();
        assert_eq!(condition.state(&snapshot, WindUnit::default()), Some(Value::Null));
    }

    #[test]
    fn empty_selection_exposes_everything() {
        let selection = Selection::from_keys::<&str>(&[]).unwrap();
        assert_eq!(selection, Selection::all());
        assert_eq!(selection.len(), SENSORS.len() + BINARY_SENSORS.len());
    }

    #[test]
    fn selection_accepts_binary_sensor_keys() {
        let selection = Selection::from_keys(&["raining", "pressure", "freezing"]).unwrap();
        let keys: Vec<_> = selection.sensors.iter().map(|s| s.key).collect();
        let flags: Vec<_> = selection.binary_sensors.iter().map(|s| s.key).collect();
        assert_eq!(keys, ["pressure"]);
        assert_eq!(flags, ["raining", "freezing"]);
    }

    #[test]
    fn selection_rejects_unknown_keys() {
        let err = Selection::from_keys(&["raining", "visibility"]).unwrap_err();
        assert!(err.to_string().contains("visibility"));
    }

    #[test]
    fn binary_state_reads_flags() {
        let mut snapshot = fixtures::snapshot();
        snapshot.low_battery = true;
        assert_eq!(find_binary("lowbattery").unwrap().state(&snapshot), Some(true));
        assert_eq!(find_binary("raining").unwrap().state(&snapshot), Some(false));
        assert!(find_binary("temperature").is_none());
    }
}
