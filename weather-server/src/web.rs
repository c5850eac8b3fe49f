use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use weather_core::{WeatherError, WeatherProvider, WeatherQuery, WeatherResponse};

const SERVICE_NAME: &str = "Weather API";

#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

#[derive(Debug, Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Boundary translation of request and lookup failures into `{detail}` responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body is not a valid `{location}` object.
    InvalidBody(JsonRejection),
    Lookup(WeatherError),
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self::Lookup(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Lookup(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::InvalidBody(rejection) => rejection.body_text(),
            Self::Lookup(
                err @ (WeatherError::InvalidLocation
                | WeatherError::LocationNotFound
                | WeatherError::TransportFailure(_)),
            ) => err.to_string(),
            Self::Lookup(WeatherError::ProviderFailure { .. }) => {
                "Weather provider internal error".to_string()
            }
            Self::Lookup(WeatherError::UnexpectedFailure(_)) => {
                "Unexpected error while processing weather data".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::InvalidBody(rejection) => {
                tracing::info!(%status, error = %rejection, "rejected weather request body")
            }
            Self::Lookup(err) => tracing::info!(%status, error = %err, "weather lookup failed"),
        }
        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/weather", post(get_weather))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Weather API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}

async fn root() -> Json<RootMessage> {
    Json(RootMessage { message: "Weather API is running!" })
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy", service: SERVICE_NAME })
}

async fn get_weather(
    State(state): State<AppState>,
    query: Result<Json<WeatherQuery>, JsonRejection>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let Json(query) = query?;
    let weather = state.provider.get_weather(&query.location).await?;
    Ok(Json(weather))
}
