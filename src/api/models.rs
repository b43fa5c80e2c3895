use serde::Serialize;

// Response models
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub dynamic_weather: String,
    pub health: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
