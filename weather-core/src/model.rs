use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound lookup request: a free-text location (city, "lat,lon", postal code).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub condition: String,
    pub condition_icon: String,
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub feels_like_c: f64,
    pub uv: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Local time as reported by the provider, e.g. "2024-05-01 13:00".
    pub time: String,
    pub temp_c: f64,
    pub condition: String,
    pub condition_icon: String,
    pub chance_of_rain: u8,
    pub wind_kph: f64,
}

/// Aggregate for one calendar day plus its hourly breakdown, in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub condition: String,
    pub condition_icon: String,
    pub chance_of_rain: u8,
    pub max_wind_kph: f64,
    pub avg_humidity: f64,
    pub hourly: Vec<HourlyForecast>,
}

/// Severe-weather notice, kept exactly as the provider sent it.
pub type Alert = Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub location: LocationInfo,
    pub current: CurrentConditions,
    pub forecast: DayForecast,
    pub alerts: Vec<Alert>,
}
