/// Field selectors sent to the logger's `template.cgi`. The response carries
/// one `;`-separated value per selector, in this order.
pub const TEMPLATE: &str = "[DD]/[MM]/[YYYY];[hh]:[mm]:[ss];[th0temp-act:0];[thb0seapress-act:0];[th0hum-act:0];[wind0avgwind-act:0];[wind0dir-avg5.0:0];[rain0total-daysum:0];[rain0rate-act:0];[th0dew-act:0];[wind0chill-act:0];[wind0wind-max1:0];[th0lowbat-act.0:0];[thb0temp-act:0];[thb0hum-act.0:0];[th0temp-dmax:0];[th0temp-dmin:0];[wind0wind-act:0];[th0heatindex-act.1:0];[uv0index-act:0];[sol0rad-act:0];[th0temp-mmin.1:0];[th0temp-mmax.1:0];[th0temp-ymin.1:0];[th0temp-ymax.1:0];[wind0wind-mmax.1:0];[wind0wind-ymax.1:0];[rain0total-mmax.1:0];[rain0total-ymax.1:0];[rain0rate-mmax.1:0];[rain0rate-ymax.1:0];[forecast-text:]";

pub const TEMPLATE_ARITY: usize = 32;

pub(crate) const DATE_INDEX: usize = 0;
pub(crate) const TIME_INDEX: usize = 1;
pub(crate) const TEMPERATURE_INDEX: usize = 2;
pub(crate) const PRESSURE_INDEX: usize = 3;
pub(crate) const HUMIDITY_INDEX: usize = 4;
pub(crate) const WIND_SPEED_AVG_INDEX: usize = 5;
pub(crate) const WIND_BEARING_INDEX: usize = 6;
pub(crate) const RAIN_TODAY_INDEX: usize = 7;
pub(crate) const RAIN_RATE_INDEX: usize = 8;
pub(crate) const DEW_POINT_INDEX: usize = 9;
pub(crate) const WIND_CHILL_INDEX: usize = 10;
pub(crate) const WIND_GUST_INDEX: usize = 11;
pub(crate) const LOW_BATTERY_INDEX: usize = 12;
pub(crate) const INDOOR_TEMPERATURE_INDEX: usize = 13;
pub(crate) const INDOOR_HUMIDITY_INDEX: usize = 14;
pub(crate) const TEMPERATURE_HIGH_INDEX: usize = 15;
pub(crate) const TEMPERATURE_LOW_INDEX: usize = 16;
pub(crate) const WIND_SPEED_INDEX: usize = 17;
pub(crate) const HEAT_INDEX_INDEX: usize = 18;
pub(crate) const UV_INDEX_INDEX: usize = 19;
pub(crate) const SOLAR_RADIATION_INDEX: usize = 20;
pub(crate) const TEMPERATURE_MONTH_MIN_INDEX: usize = 21;
pub(crate) const TEMPERATURE_MONTH_MAX_INDEX: usize = 22;
pub(crate) const TEMPERATURE_YEAR_MIN_INDEX: usize = 23;
pub(crate) const TEMPERATURE_YEAR_MAX_INDEX: usize = 24;
pub(crate) const WIND_SPEED_MONTH_MAX_INDEX: usize = 25;
pub(crate) const WIND_SPEED_YEAR_MAX_INDEX: usize = 26;
pub(crate) const RAIN_MONTH_MAX_INDEX: usize = 27;
pub(crate) const RAIN_YEAR_MAX_INDEX: usize = 28;
pub(crate) const RAIN_RATE_MONTH_MAX_INDEX: usize = 29;
pub(crate) const RAIN_RATE_YEAR_MAX_INDEX: usize = 30;
pub(crate) const FORECAST_INDEX: usize = 31;
