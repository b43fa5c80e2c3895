use crate::domain::ports::{ConfigProvider, ForecastSource};
use crate::domain::upstream::CwaForecastResponse;
use crate::utils::error::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_API_BASE_URL: &str = "https://opendata.cwa.gov.tw/api";
/// 一般天氣預報 - 今明 36 小時天氣預報
pub const DEFAULT_DATASET_ID: &str = "F-C0032-001";

#[derive(Debug, Clone)]
pub struct CwaClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    dataset_id: String,
}

impl CwaClient {
    pub fn new(base_url: String, api_key: Option<String>, dataset_id: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            dataset_id,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.api_base_url().to_string(),
            config.api_key().map(str::to_string),
            config.dataset_id().to_string(),
        )
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1/rest/datastore/{}",
            self.base_url.trim_end_matches('/'),
            self.dataset_id
        )
    }
}

#[async_trait]
impl ForecastSource for CwaClient {
    async fn fetch_forecast(&self, location_name: &str) -> Result<CwaForecastResponse> {
        // 沒有 API Key 就不呼叫上游
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let endpoint = self.endpoint();
        tracing::debug!("Requesting CWA forecast for {} from {}", location_name, endpoint);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("Authorization", api_key), ("locationName", location_name)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("CWA API response status: {}", status);

        let bytes = response.bytes().await?;

        if !status.is_success() {
            // 上游錯誤內容盡量保留，JSON 以外的內容以字串形式帶回
            let body = serde_json::from_slice::<serde_json::Value>(&bytes)
                .ok()
                .or_else(|| {
                    let text = String::from_utf8_lossy(&bytes).trim().to_string();
                    (!text.is_empty()).then_some(serde_json::Value::String(text))
                });

            return Err(WeatherError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: CwaForecastResponse = serde_json::from_slice(&bytes)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const PATH: &str = "/v1/rest/datastore/F-C0032-001";

    fn client_for(server: &MockServer, api_key: Option<&str>) -> CwaClient {
        CwaClient::new(
            server.base_url(),
            api_key.map(str::to_string),
            DEFAULT_DATASET_ID.to_string(),
        )
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = CwaClient::new(
            "https://opendata.cwa.gov.tw/api/".to_string(),
            None,
            DEFAULT_DATASET_ID.to_string(),
        );
        assert_eq!(
            client.endpoint(),
            "https://opendata.cwa.gov.tw/api/v1/rest/datastore/F-C0032-001"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_credential_and_location() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(PATH)
                    .query_param("Authorization", "test-key")
                    .query_param_exists("locationName");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({
                        "success": "true",
                        "records": {
                            "issueTime": "2024-01-01 05:00:00",
                            "location": [{"locationName": "臺北市", "weatherElement": []}]
                        }
                    }));
            })
            .await;

        let client = client_for(&server, Some("test-key"));
        let response = client.fetch_forecast("臺北市").await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(response.records.location.len(), 1);
        assert_eq!(response.records.location[0].location_name, "臺北市");
    }

    #[tokio::test]
    async fn test_fetch_without_api_key_skips_upstream() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path(PATH);
                then.status(200).json_body(serde_json::json!({"records": {"location": []}}));
            })
            .await;

        let client = client_for(&server, None);
        let result = client.fetch_forecast("臺北市").await;

        assert!(matches!(result, Err(WeatherError::MissingApiKey)));
        assert_eq!(api_mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_fetch_upstream_error_keeps_status_and_body() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path(PATH);
                then.status(503)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"message": "Service Unavailable"}));
            })
            .await;

        let client = client_for(&server, Some("test-key"));
        let err = client.fetch_forecast("臺北市").await.unwrap_err();

        api_mock.assert_async().await;
        match err {
            WeatherError::UpstreamStatus { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body.unwrap()["message"], "Service Unavailable");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_upstream_error_with_plain_text_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(PATH);
                then.status(401).body("Unauthorized");
            })
            .await;

        let client = client_for(&server, Some("bad-key"));
        let err = client.fetch_forecast("臺北市").await.unwrap_err();

        match err {
            WeatherError::UpstreamStatus { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, Some(serde_json::Value::String("Unauthorized".to_string())));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_json_is_serialization_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(PATH);
                then.status(200).body("not json");
            })
            .await;

        let client = client_for(&server, Some("test-key"));
        let result = client.fetch_forecast("臺北市").await;

        assert!(matches!(result, Err(WeatherError::SerializationError(_))));
    }
}
