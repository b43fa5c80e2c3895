use serde::{Deserialize, Serialize};

/// 單一時段的預報結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedForecast {
    pub start_time: String,
    pub end_time: String,
    pub weather: String,
    /// 降雨機率 (%)，上游值無法解析為整數時輸出 null
    pub rain: Option<i32>,
    pub min_temp: Option<i32>,
    pub max_temp: Option<i32>,
    pub comfort: String,
    pub wind_speed: String,
}

impl NormalizedForecast {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            weather: String::new(),
            rain: Some(0),
            min_temp: Some(0),
            max_temp: Some(0),
            comfort: String::new(),
            wind_speed: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
    pub forecasts: Vec<NormalizedForecast>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
            details: None,
        }
    }

    pub fn title_only(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_serializes_camel_case() {
        let mut forecast = NormalizedForecast::new("2024-01-01 06:00:00", "2024-01-01 18:00:00");
        forecast.weather = "晴時多雲".to_string();
        forecast.rain = None;

        let json = serde_json::to_value(&forecast).unwrap();
        assert_eq!(json["startTime"], "2024-01-01 06:00:00");
        assert_eq!(json["endTime"], "2024-01-01 18:00:00");
        assert_eq!(json["weather"], "晴時多雲");
        assert!(json["rain"].is_null());
        assert_eq!(json["minTemp"], 0);
        assert_eq!(json["maxTemp"], 0);
        assert_eq!(json["windSpeed"], "");
    }

    #[test]
    fn test_report_omits_missing_update_time() {
        let report = WeatherReport {
            city: "臺北市".to_string(),
            update_time: None,
            forecasts: vec![],
        };

        let json = serde_json::to_value(ApiResponse::success(report)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["city"], "臺北市");
        assert!(json["data"].get("updateTime").is_none());
    }
}
