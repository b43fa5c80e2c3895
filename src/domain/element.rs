//! Upstream weather element tags and how each one lands on a [`NormalizedForecast`].

use crate::domain::model::NormalizedForecast;

/// 上游資料集中已知的天氣要素代碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTag {
    /// 天氣現象
    Wx,
    /// 降雨機率
    PoP,
    MinT,
    MaxT,
    /// 舒適度
    CI,
    /// 風速
    WS,
}

impl ElementTag {
    /// 未知代碼回傳 None，呼叫端直接略過
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Wx" => Some(ElementTag::Wx),
            "PoP" => Some(ElementTag::PoP),
            "MinT" => Some(ElementTag::MinT),
            "MaxT" => Some(ElementTag::MaxT),
            "CI" => Some(ElementTag::CI),
            "WS" => Some(ElementTag::WS),
            _ => None,
        }
    }

    pub fn apply(self, forecast: &mut NormalizedForecast, value: &str) {
        match self {
            ElementTag::Wx => forecast.weather = value.to_string(),
            ElementTag::PoP => forecast.rain = parse_leading_int(value),
            ElementTag::MinT => forecast.min_temp = parse_leading_int(value),
            ElementTag::MaxT => forecast.max_temp = parse_leading_int(value),
            ElementTag::CI => forecast.comfort = value.to_string(),
            ElementTag::WS => forecast.wind_speed = value.to_string(),
        }
    }
}

/// 取字串開頭的整數部分，例如 "20%" 得到 20；開頭不是數字時回傳 None
///
/// 超出 `i32` 範圍的數值（例如 "99999999999"）同樣回傳 None，輸出為 JSON null
pub fn parse_leading_int(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1i64, &trimmed[1..]),
        Some(b'+') => (1i64, &trimmed[1..]),
        _ => (1i64, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    i32::try_from(sign * magnitude).ok()
}
