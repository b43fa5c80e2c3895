use crate::domain::element::ElementTag;
use crate::domain::model::{NormalizedForecast, WeatherReport};
use crate::domain::ports::ForecastSource;
use crate::domain::upstream::{CwaForecastResponse, CwaLocation, CwaTimeSlot};
use crate::utils::error::{Result, WeatherError};
use std::sync::Arc;

#[derive(Clone)]
pub struct ForecastService {
    source: Arc<dyn ForecastSource>,
}

impl ForecastService {
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self { source }
    }

    /// 向上游查詢指定城市，整理成前端使用的格式
    pub async fn forecast_for(&self, location_name: &str) -> Result<WeatherReport> {
        let response = self.source.fetch_forecast(location_name).await?;
        let report = build_report(location_name, response)?;

        tracing::debug!(
            "Built {} forecast periods for {}",
            report.forecasts.len(),
            report.city
        );
        Ok(report)
    }
}

pub fn build_report(location_name: &str, response: CwaForecastResponse) -> Result<WeatherReport> {
    let records = response.records;

    let location = records
        .location
        .into_iter()
        .find(|location| location.location_name == location_name)
        .ok_or_else(|| WeatherError::LocationNotFound {
            location: location_name.to_string(),
        })?;

    let forecasts = normalize_location(&location)?;

    Ok(WeatherReport {
        city: location.location_name,
        update_time: records.issue_time,
        forecasts,
    })
}

pub fn normalize_location(location: &CwaLocation) -> Result<Vec<NormalizedForecast>> {
    // 未知要素直接略過，不檢查格式與時段數
    let known = location
        .weather_element
        .iter()
        .filter_map(|element| ElementTag::parse(&element.element_name).map(|tag| (tag, element)))
        .map(|(tag, element)| {
            element
                .typed_slots()
                .map(|slots| (tag, element.element_name.as_str(), slots))
        })
        .collect::<Result<Vec<(ElementTag, &str, Vec<CwaTimeSlot>)>>>()?;

    // 第一個已知要素決定時段數量與起訖時間
    let (_, _, first_slots) = known.first().ok_or_else(|| WeatherError::MalformedPayload {
        message: format!(
            "location {} has no known weather elements",
            location.location_name
        ),
    })?;
    let slot_count = first_slots.len();

    if let Some((_, name, slots)) = known
        .iter()
        .find(|(_, _, slots)| slots.len() != slot_count)
    {
        return Err(WeatherError::MalformedPayload {
            message: format!(
                "element {} has {} time slots, expected {}",
                name,
                slots.len(),
                slot_count
            ),
        });
    }

    let forecasts = first_slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let mut forecast = NormalizedForecast::new(&slot.start_time, &slot.end_time);

            for (tag, _, slots) in &known {
                tag.apply(&mut forecast, &slots[index].parameter.parameter_name);
            }

            forecast
        })
        .collect();

    Ok(forecasts)
}
