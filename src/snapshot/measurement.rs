use chrono::DateTime;
use chrono_tz::Tz;
use indexmap::IndexMap;

use crate::snapshot::{Condition, ForecastUpdate, Value};
use crate::units::UnitSystem;

const TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// One complete reading from the logger, with every numeric field already in
/// `unit_system`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSnapshot {
    pub measured_at: DateTime<Tz>,

    pub unit_system: UnitSystem,

    pub temperature: f64,

    pub temperature_high: f64,

    pub temperature_low: f64,

    pub indoor_temperature: f64,

    pub humidity: i64,

    pub indoor_humidity: i64,

    pub dew_point: f64,

    pub wind_bearing: i64,

    pub wind_direction: &'static str,

    pub wind_speed_avg: f64,

    pub wind_speed: f64,

    pub wind_gust: f64,

    pub wind_chill: f64,

    pub heat_index: f64,

    pub feels_like: f64,

    pub pressure: f64,

    pub rain_rate: f64,

    pub rain_today: f64,

    pub uv_index: f64,

    pub solar_radiation: f64,

    pub temperature_month_min: f64,

    pub temperature_month_max: f64,

    pub temperature_year_min: f64,

    pub temperature_year_max: f64,

    pub wind_speed_month_max: f64,

    pub wind_speed_year_max: f64,

    pub rain_month_max: f64,

    pub rain_year_max: f64,

    pub rain_rate_month_max: f64,

    pub rain_rate_year_max: f64,

    pub forecast: String,

    pub raining: bool,

    pub freezing: bool,

    pub low_battery: bool,

    pub condition: Option<Condition>,

    pub precip_probability: Option<u8>,
}

impl MeasurementSnapshot {
    pub fn values(&self) -> IndexMap<&'static str, Value> {
        IndexMap::from([
            ("in_temperature", self.indoor_temperature.into()),
            ("in_humidity", self.indoor_humidity.into()),
            ("temperature", self.temperature.into()),
            ("temphigh", self.temperature_high.into()),
            ("templow", self.temperature_low.into()),
            ("humidity", self.humidity.into()),
            ("dewpoint", self.dew_point.into()),
            ("windbearing", self.wind_bearing.into()),
            ("winddirection", self.wind_direction.into()),
            ("windspeedavg", self.wind_speed_avg.into()),
            ("windspeed", self.wind_speed.into()),
            ("windgust", self.wind_gust.into()),
            ("windchill", self.wind_chill.into()),
            ("heatindex", self.heat_index.into()),
            ("feels_like", self.feels_like.into()),
            ("pressure", self.pressure.into()),
            ("rainrate", self.rain_rate.into()),
            ("raintoday", self.rain_today.into()),
            ("uvindex", self.uv_index.into()),
            ("solarrad", self.solar_radiation.into()),
            ("lowbattery", self.low_battery.into()),
            ("raining", self.raining.into()),
            ("freezing", self.freezing.into()),
            ("forecast", self.forecast.as_str().into()),
            ("time", self.measured_at.format(TIME_FORMAT).to_string().into()),
            ("condition", self.condition.map(|c| c.as_str()).into()),
            ("precip_probability", self.precip_probability.map(i64::from).into()),
            ("temp_mmin", self.temperature_month_min.into()),
            ("temp_mmax", self.temperature_month_max.into()),
            ("temp_ymin", self.temperature_year_min.into()),
            ("temp_ymax", self.temperature_year_max.into()),
            ("windspeed_mmax", self.wind_speed_month_max.into()),
            ("windspeed_ymax", self.wind_speed_year_max.into()),
            ("rain_mmax", self.rain_month_max.into()),
            ("rain_ymax", self.rain_year_max.into()),
            ("rainrate_mmax", self.rain_rate_month_max.into()),
            ("rainrate_ymax", self.rain_rate_year_max.into()),
        ])
    }

    pub fn value(&self, key: &str) -> Option<Value> {
        self.values().swap_remove(key)
    }

    pub fn apply_forecast(&mut self, update: ForecastUpdate) {
        self.condition = update.condition;
        self.precip_probability = update.precip_probability;
    }
}
