use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Location name is required")]
    MissingLocation,

    #[error("Upstream API key is not configured")]
    MissingApiKey,

    #[error("No forecast data for location: {location}")]
    LocationNotFound { location: String },

    #[error("Upstream API responded with status {status}")]
    UpstreamStatus {
        status: u16,
        body: Option<serde_json::Value>,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed upstream payload: {message}")]
    MalformedPayload { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl WeatherError {
    /// 對應到回給前端的 HTTP 狀態碼
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::MissingLocation => StatusCode::BAD_REQUEST,
            WeatherError::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            // 上游錯誤狀態碼直接轉給前端，非錯誤碼則視為伺服器錯誤
            WeatherError::UpstreamStatus { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|code| code.is_client_error() || code.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 是否為使用者輸入造成的錯誤
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            WeatherError::MissingLocation.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WeatherError::MissingApiKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WeatherError::LocationNotFound {
                location: "臺北市".to_string()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WeatherError::MalformedPayload {
                message: "no elements".to_string()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_status_is_mirrored() {
        let err = WeatherError::UpstreamStatus {
            status: 503,
            body: None,
        };
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let err = WeatherError::UpstreamStatus {
            status: 401,
            body: None,
        };
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert!(err.is_client_error());
    }

    #[test]
    fn test_upstream_non_error_status_falls_back_to_500() {
        let err = WeatherError::UpstreamStatus {
            status: 302,
            body: None,
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
