use crate::{ProviderConfig, WeatherError, WeatherResponse, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod weatherapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up current conditions, today's forecast and alerts for `location`.
    async fn get_weather(&self, location: &str) -> Result<WeatherResponse, WeatherError>;
}

/// Construct the shared provider used by request handlers.
pub fn provider_from_config(
    config: &ProviderConfig,
) -> Result<Arc<dyn WeatherProvider>, WeatherError> {
    Ok(Arc::new(WeatherApiProvider::new(config)?))
}
