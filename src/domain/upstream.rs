//! 上游 CWA 開放資料 (F-C0032-001) 回應格式，只保留實際使用的欄位。

use crate::utils::error::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CwaForecastResponse {
    pub records: CwaRecords,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwaRecords {
    #[serde(default)]
    pub issue_time: Option<String>,
    pub location: Vec<CwaLocation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwaLocation {
    pub location_name: String,
    #[serde(default)]
    pub weather_element: Vec<CwaWeatherElement>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwaWeatherElement {
    pub element_name: String,
    /// 各要素的時段格式不一定相同，只在需要時才轉成 [`CwaTimeSlot`]
    #[serde(default)]
    pub time: Vec<serde_json::Value>,
}

impl CwaWeatherElement {
    pub fn typed_slots(&self) -> Result<Vec<CwaTimeSlot>> {
        let slots = self
            .time
            .iter()
            .map(|slot| serde_json::from_value(slot.clone()))
            .collect::<std::result::Result<Vec<CwaTimeSlot>, _>>()?;
        Ok(slots)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwaTimeSlot {
    pub start_time: String,
    pub end_time: String,
    pub parameter: CwaParameter,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwaParameter {
    pub parameter_name: String,
    #[serde(default)]
    pub parameter_value: Option<String>,
    #[serde(default)]
    pub parameter_unit: Option<String>,
}
