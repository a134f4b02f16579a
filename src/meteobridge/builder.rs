use chrono::{LocalResult, NaiveDateTime};
use chrono_tz::Tz;

use crate::meteobridge::*;
use crate::snapshot::MeasurementSnapshot;
use crate::units::{self, UnitSystem};

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Turn one decoded row into a snapshot in `unit_system`.
///
/// The logger reports local wall-clock time, resolved here in `timezone`.
/// `freezing` is judged on the Celsius reading before conversion; `raining`
/// and `low_battery` on the raw tokens.
pub fn build_snapshot(
    row: &RawFieldRow,
    unit_system: UnitSystem,
    timezone: Tz,
) -> Result<MeasurementSnapshot, ParseError> {
    let measured_at = parse_timestamp(row.get(DATE_INDEX), row.get(TIME_INDEX), timezone)?;

    let number = |index: usize, field: &'static str| parse_number(row, index, field);
    let temperature = |index: usize, field: &'static str| {
        number(index, field).map(|v| units::temperature(v, unit_system))
    };
    let speed = |index: usize, field: &'static str| {
        number(index, field).map(|v| units::speed(v, unit_system))
    };
    let volume = |index: usize, field: &'static str| {
        number(index, field).map(|v| units::volume(v, unit_system))
    };
    let rate = |index: usize, field: &'static str| {
        number(index, field).map(|v| units::rate(v, unit_system))
    };

    let outdoor_celsius = number(TEMPERATURE_INDEX, "temperature")?;
    let rain_rate_raw = number(RAIN_RATE_INDEX, "rain rate")?;
    let battery_raw = number(LOW_BATTERY_INDEX, "low battery flag")?;
    let bearing = number(WIND_BEARING_INDEX, "wind bearing")?;

    let outdoor_temperature = units::temperature(outdoor_celsius, unit_system);
    let heat_index = temperature(HEAT_INDEX_INDEX, "heat index")?;
    let wind_chill = temperature(WIND_CHILL_INDEX, "wind chill")?;

    Ok(MeasurementSnapshot {
        measured_at,
        unit_system,
        temperature: outdoor_temperature,
        temperature_high: temperature(TEMPERATURE_HIGH_INDEX, "daily high temperature")?,
        temperature_low: temperature(TEMPERATURE_LOW_INDEX, "daily low temperature")?,
        indoor_temperature: temperature(INDOOR_TEMPERATURE_INDEX, "indoor temperature")?,
        humidity: number(HUMIDITY_INDEX, "humidity")?.round() as i64,
        indoor_humidity: number(INDOOR_HUMIDITY_INDEX, "indoor humidity")?.round() as i64,
        dew_point: temperature(DEW_POINT_INDEX, "dew point")?,
        wind_bearing: bearing.trunc() as i64,
        wind_direction: units::wind_direction(bearing),
        wind_speed_avg: speed(WIND_SPEED_AVG_INDEX, "average wind speed")?,
        wind_speed: speed(WIND_SPEED_INDEX, "wind speed")?,
        wind_gust: speed(WIND_GUST_INDEX, "wind gust")?,
        wind_chill,
        heat_index,
        feels_like: units::feels_like(outdoor_temperature, heat_index, wind_chill, unit_system),
        pressure: units::pressure(number(PRESSURE_INDEX, "pressure")?, unit_system),
        rain_rate: units::rate(rain_rate_raw, unit_system),
        rain_today: volume(RAIN_TODAY_INDEX, "rain today")?,
        uv_index: number(UV_INDEX_INDEX, "UV index")?,
        solar_radiation: number(SOLAR_RADIATION_INDEX, "solar radiation")?,
        temperature_month_min: temperature(TEMPERATURE_MONTH_MIN_INDEX, "monthly min temperature")?,
        temperature_month_max: temperature(TEMPERATURE_MONTH_MAX_INDEX, "monthly max temperature")?,
        temperature_year_min: temperature(TEMPERATURE_YEAR_MIN_INDEX, "yearly min temperature")?,
        temperature_year_max: temperature(TEMPERATURE_YEAR_MAX_INDEX, "yearly max temperature")?,
        wind_speed_month_max: speed(WIND_SPEED_MONTH_MAX_INDEX, "monthly max wind speed")?,
        wind_speed_year_max: speed(WIND_SPEED_YEAR_MAX_INDEX, "yearly max wind speed")?,
        rain_month_max: volume(RAIN_MONTH_MAX_INDEX, "monthly max rain")?,
        rain_year_max: volume(RAIN_YEAR_MAX_INDEX, "yearly max rain")?,
        rain_rate_month_max: rate(RAIN_RATE_MONTH_MAX_INDEX, "monthly max rain rate")?,
        rain_rate_year_max: rate(RAIN_RATE_YEAR_MAX_INDEX, "yearly max rain rate")?,
        forecast: row.get(FORECAST_INDEX).to_owned(),
        raining: rain_rate_raw > 0.0,
        freezing: outdoor_celsius < 0.0,
        low_battery: battery_raw > 0.0,
        condition: None,
        precip_probability: None,
    })
}

fn parse_timestamp(
    date: &str,
    time: &str,
    timezone: Tz,
) -> Result<chrono::DateTime<Tz>, ParseError> {
    let value = format!("{date} {time}");
    let naive = NaiveDateTime::parse_from_str(&value, TIMESTAMP_FORMAT).map_err(|source| {
        ParseError::Timestamp {
            value: value.clone(),
            source,
        }
    })?;

    match naive.and_local_timezone(timezone) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(dt, _) => Ok(dt),
        LocalResult::None => Err(ParseError::NonexistentTime {
            value,
            timezone: timezone.name().to_owned(),
        }),
    }
}

fn parse_number(row: &RawFieldRow, index: usize, field: &'static str) -> Result<f64, ParseError> {
    let value = row.get(index);
    value.parse().map_err(|source| ParseError::Number {
        field,
        value: value.to_owned(),
        source,
    })
}
