use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, error, warn};

use crate::{
    ProviderConfig, WeatherError,
    model::{CurrentConditions, DayForecast, HourlyForecast, LocationInfo, WeatherResponse},
};

use super::WeatherProvider;

/// WeatherAPI.com client for `forecast.json`.
#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            api_key: config.api_key.clone().unwrap_or_default(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn fetch_forecast(&self, location: &str) -> Result<String, WeatherError> {
        let url = format!("{}/forecast.json", self.base_url);
        debug!(%url, location, "requesting forecast from WeatherAPI");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", "1"),
                ("aqi", "yes"),
                ("alerts", "yes"),
            ])
            .send()
            .await
            // The URL carries the API key in its query string.
            .map_err(reqwest::Error::without_url)
            .inspect_err(|e| warn!(error = %e, "WeatherAPI request failed"))?;

        let status = res.status();
        let body = res.text().await?;

        match status {
            StatusCode::OK => Ok(body),
            StatusCode::BAD_REQUEST => {
                debug!(location, body = %truncate_body(&body), "WeatherAPI could not resolve location");
                Err(WeatherError::LocationNotFound)
            }
            status => {
                warn!(%status, body = %truncate_body(&body), "WeatherAPI returned an error status");
                Err(WeatherError::ProviderFailure { status })
            }
        }
    }
}

impl fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    /// The location is forwarded as received; only a blank one is rejected locally.
    async fn get_weather(&self, location: &str) -> Result<WeatherResponse, WeatherError> {
        if location.trim().is_empty() {
            return Err(WeatherError::InvalidLocation);
        }

        let body = self.fetch_forecast(location).await?;

        parse_forecast(&body).inspect_err(|e| error!(error = %e, "failed to reshape WeatherAPI payload"))
    }
}

/// Reshape a raw `forecast.json` body into the flattened response.
pub fn parse_forecast(body: &str) -> Result<WeatherResponse, WeatherError> {
    let parsed: WaForecastResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::unexpected(format!("invalid forecast JSON: {e}")))?;

    let day = parsed
        .forecast
        .forecastday
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::unexpected("response contained no forecastday data"))?;

    let alerts = parsed.alerts.and_then(|a| a.alert).unwrap_or_default();

    Ok(WeatherResponse {
        location: parsed.location.into(),
        current: parsed.current.into(),
        forecast: day.into(),
        alerts,
    })
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    region: String,
    country: String,
    lat: f64,
    lon: f64,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    temp_f: f64,
    condition: WaCondition,
    humidity: u8,
    wind_kph: f64,
    wind_dir: String,
    pressure_mb: f64,
    feelslike_c: f64,
    uv: f64,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: WaCondition,
    daily_chance_of_rain: u8,
    maxwind_kph: f64,
    avghumidity: f64,
}

#[derive(Debug, Deserialize)]
struct WaForecastHour {
    time: String,
    temp_c: f64,
    condition: WaCondition,
    chance_of_rain: u8,
    wind_kph: f64,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: NaiveDate,
    day: WaDay,
    hour: Vec<WaForecastHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaAlerts {
    alert: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
    alerts: Option<WaAlerts>,
}

impl From<WaLocation> for LocationInfo {
    fn from(l: WaLocation) -> Self {
        Self {
            name: l.name,
            region: l.region,
            country: l.country,
            lat: l.lat,
            lon: l.lon,
            localtime: l.localtime,
        }
    }
}

impl From<WaCurrent> for CurrentConditions {
    fn from(c: WaCurrent) -> Self {
        Self {
            temperature_c: c.temp_c,
            temperature_f: c.temp_f,
            condition: c.condition.text,
            condition_icon: c.condition.icon,
            humidity: c.humidity,
            wind_kph: c.wind_kph,
            wind_dir: c.wind_dir,
            pressure_mb: c.pressure_mb,
            feels_like_c: c.feelslike_c,
            uv: c.uv,
        }
    }
}

impl From<WaForecastHour> for HourlyForecast {
    fn from(h: WaForecastHour) -> Self {
        Self {
            time: h.time,
            temp_c: h.temp_c,
            condition: h.condition.text,
            condition_icon: h.condition.icon,
            chance_of_rain: h.chance_of_rain,
            wind_kph: h.wind_kph,
        }
    }
}

impl From<WaForecastDay> for DayForecast {
    fn from(d: WaForecastDay) -> Self {
        Self {
            date: d.date,
            max_temp_c: d.day.maxtemp_c,
            min_temp_c: d.day.mintemp_c,
            condition: d.day.condition.text,
            condition_icon: d.day.condition.icon,
            chance_of_rain: d.day.daily_chance_of_rain,
            max_wind_kph: d.day.maxwind_kph,
            avg_humidity: d.day.avghumidity,
            hourly: d.hour.into_iter().map(HourlyForecast::from).collect(),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
