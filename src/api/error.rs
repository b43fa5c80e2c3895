use crate::domain::model::ErrorBody;
use crate::utils::error::WeatherError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

pub const EXAMPLE_PATH: &str = "/api/weather/臺北市";

impl WeatherError {
    /// 轉換成回給前端的錯誤內容
    pub fn to_error_body(&self) -> ErrorBody {
        match self {
            WeatherError::MissingLocation => ErrorBody::new(
                "請求錯誤",
                format!("請在路徑中指定城市名稱，例如 {}", EXAMPLE_PATH),
            ),
            WeatherError::MissingApiKey => ErrorBody::new(
                "伺服器設定錯誤",
                "請設定 CWA_API_KEY 環境變數或設定檔中的 upstream.api_key",
            ),
            WeatherError::LocationNotFound { location } => ErrorBody::new(
                "查無資料",
                format!("無法取得 {} 天氣資料，請檢查城市名稱是否正確", location),
            ),
            WeatherError::UpstreamStatus { body, .. } => {
                let message = body
                    .as_ref()
                    .and_then(|b| b.get("message"))
                    .and_then(|m| m.as_str())
                    .filter(|m| !m.is_empty())
                    .unwrap_or("無法取得天氣資料");

                ErrorBody::new("CWA API 錯誤", message)
                    .with_details(body.clone().unwrap_or(serde_json::Value::Null))
            }
            _ => ErrorBody::new("伺服器錯誤", "無法取得天氣資料，請稍後再試"),
        }
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

pub fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::title_only("找不到此路徑")),
    )
        .into_response()
}

/// handler panic 時回傳 500，不讓整個服務中斷
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!("💥 Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("伺服器錯誤", detail)),
    )
        .into_response()
}
