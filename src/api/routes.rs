use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
    routing::get,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use super::error::{handle_panic, route_not_found};
use super::models::{Endpoints, HealthResponse, IndexResponse};
use crate::adapters::cwa::CwaClient;
use crate::config::AppConfig;
use crate::core::forecast::ForecastService;
use crate::domain::model::{ApiResponse, WeatherReport};
use crate::utils::error::WeatherError;
use crate::utils::validation::validate_location_name;

pub const HEALTH_PATH: &str = "/api/health";
pub const WEATHER_PATH: &str = "/api/weather/:locationName";

#[derive(Clone)]
pub struct AppState {
    pub forecasts: ForecastService,
}

impl AppState {
    pub fn new(forecasts: ForecastService) -> Self {
        Self { forecasts }
    }

    /// 依設定建立連到 CWA 的服務
    pub fn from_config(config: &AppConfig) -> Self {
        let client = CwaClient::from_config(config);
        Self::new(ForecastService::new(Arc::new(client)))
    }
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "歡迎使用 森森丸天氣 API".to_string(),
        endpoints: Endpoints {
            dynamic_weather: WEATHER_PATH.to_string(),
            health: HEALTH_PATH.to_string(),
        },
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn weather_by_location(
    State(state): State<AppState>,
    location: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<WeatherReport>>, WeatherError> {
    let raw = location.ok().map(|Path(name)| name);
    let location_name = validate_location_name(raw.as_deref())?;

    tracing::debug!("🌤️ Weather request for {}", location_name);

    match state.forecasts.forecast_for(location_name).await {
        Ok(report) => Ok(Json(ApiResponse::success(report))),
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!("Failed to get weather for {}: {}", location_name, e);
            } else {
                tracing::error!("❌ Failed to get weather for {}: {}", location_name, e);
            }
            Err(e)
        }
    }
}

pub async fn weather_without_location() -> WeatherError {
    WeatherError::MissingLocation
}

async fn fallback() -> Response {
    route_not_found()
}

// Define all API routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(HEALTH_PATH, get(health))
        .route("/api/weather", get(weather_without_location))
        .route("/api/weather/", get(weather_without_location))
        .route("/api/weather/{location_name}", get(weather_by_location))
        .fallback(fallback)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
