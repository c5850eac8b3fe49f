//! Core library for the weather proxy.
//!
//! This crate defines:
//! - Configuration for the upstream provider and the HTTP server
//! - Abstraction over weather providers, with the WeatherAPI.com implementation
//! - The flattened response model served to the front-end
//! - The error taxonomy of a lookup
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{Config, ProviderConfig, ServerConfig};
pub use error::WeatherError;
pub use model::{
    Alert, CurrentConditions, DayForecast, HourlyForecast, LocationInfo, WeatherQuery,
    WeatherResponse,
};
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
