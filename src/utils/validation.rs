use crate::utils::error::{WeatherError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(WeatherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(WeatherError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(WeatherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(WeatherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WeatherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 路徑參數中的城市名稱，去除空白後不可為空
pub fn validate_location_name(value: Option<&str>) -> Result<&str> {
    match value.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(WeatherError::MissingLocation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base_url", "https://opendata.cwa.gov.tw/api").is_ok());
        assert!(validate_url("api_base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api_base_url", "").is_err());
        assert!(validate_url("api_base_url", "invalid-url").is_err());
        assert!(validate_url("api_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("port", 3000, 1).is_ok());
        assert!(validate_positive_number("port", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("dataset_id", "F-C0032-001").is_ok());
        assert!(validate_non_empty_string("dataset_id", "   ").is_err());
    }

    #[test]
    fn test_validate_location_name() {
        assert_eq!(validate_location_name(Some("臺北市")).unwrap(), "臺北市");
        assert_eq!(validate_location_name(Some("  高雄市 ")).unwrap(), "高雄市");
        assert!(matches!(
            validate_location_name(Some("  ")),
            Err(WeatherError::MissingLocation)
        ));
        assert!(matches!(
            validate_location_name(None),
            Err(WeatherError::MissingLocation)
        ));
    }
}
