use crate::domain::upstream::CwaForecastResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn dataset_id(&self) -> &str;
}

/// 取得指定城市原始預報資料的來源
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch_forecast(&self, location_name: &str) -> Result<CwaForecastResponse>;
}
