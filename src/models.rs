use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// The artifact published by the crawler pipeline. Everything the dashboard
/// shows comes out of this one document; absent sections degrade to
/// placeholders rather than failing the whole view.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardData {
    #[serde(default)]
    pub chart_data: BTreeMap<String, Vec<TimeSeriesRecord>>,
    #[serde(default)]
    pub table_data: BTreeMap<String, TableSection>,
    #[serde(default)]
    pub weather_data: Option<WeatherData>,
    #[serde(default)]
    pub exchange_rate_history: Vec<ExchangeRatePoint>,
}

/// One dated row of an index family's series. Route fields are open-ended
/// (`KCCI_종합지수`, `FBX_유럽 → 남미동안`, ...) so they stay in a flattened
/// map; a field missing for a given date is simply absent or null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesRecord {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Option<f64>>,
}

impl TimeSeriesRecord {
    pub fn value(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied().flatten()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TableSection {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

/// One route's display data. The crawler writes `current_index` and
/// `previous_index` as sheet cell text, so `""` and `"1,234.56"` both occur
/// alongside plain numbers; they normalize to `None` / `Some` on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    pub route: String,
    #[serde(default, deserialize_with = "index_value")]
    pub current_index: Option<f64>,
    #[serde(default, deserialize_with = "index_value")]
    pub previous_index: Option<f64>,
    #[serde(default)]
    pub weekly_change: WeeklyChange,
}

/// Preformatted by the crawler: `value` like `"123.40"`, `percentage` like
/// `"2.15%"`, `color_class` one of `text-red-500` / `text-blue-500` /
/// `text-gray-700`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeeklyChange {
    pub value: Option<String>,
    pub percentage: Option<String>,
    pub color_class: Option<String>,
}

/// Canonical field name is `USD`; one upstream variant spelled it `rate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeRatePoint {
    pub date: NaiveDate,
    #[serde(rename = "USD", alias = "rate")]
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeatherData {
    #[serde(default, alias = "current_weather")]
    pub current: CurrentWeather,
    #[serde(default, alias = "forecast_weather")]
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurrentWeather {
    #[serde(default, alias = "LA_WeatherStatus")]
    pub status: Option<String>,
    #[serde(default, alias = "LA_WeatherIcon")]
    pub icon: Option<String>,
    #[serde(default, alias = "LA_Temperature")]
    pub temperature: Option<f64>,
    #[serde(default, alias = "LA_Humidity")]
    pub humidity: Option<f64>,
    #[serde(default, alias = "LA_WindSpeed")]
    pub wind_speed: Option<f64>,
    #[serde(default, alias = "LA_Pressure")]
    pub pressure: Option<f64>,
    #[serde(default, alias = "LA_Visibility")]
    pub visibility: Option<f64>,
    #[serde(default, alias = "LA_Sunrise")]
    pub sunrise: Option<String>,
    #[serde(default, alias = "LA_Sunset")]
    pub sunset: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    #[serde(default)]
    pub min_temp: Option<f64>,
    #[serde(default)]
    pub max_temp: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DataPoint {
    pub x: NaiveDate,
    pub y: f64,
}

/// One named, colored series for a chart. Never constructed with zero
/// points; routes whose series filters down to nothing are dropped.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<DataPoint>,
    pub color: &'static str,
    pub border_color: &'static str,
    pub border_width: u8,
}

/// Accepts a JSON number, a numeric string (commas tolerated), `""` or null.
fn index_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        None,
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(Some(n)),
        Raw::None => Ok(None),
        Raw::Text(text) => {
            let cleaned = text.trim().replace(',', "");
            if cleaned.is_empty() {
                Ok(None)
            } else {
                cleaned
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| serde::de::Error::custom(format!("not a number: {text:?}")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_row_accepts_text_and_numeric_indices() {
        let row: TableRow = serde_json::from_str(
            r#"{"route":"KCCI_종합지수","current_index":"2,079.96","previous_index":1985.0,
                "weekly_change":{"value":"94.96","percentage":"4.78%","color_class":"text-red-500"}}"#,
        )
        .unwrap();
        assert_eq!(row.current_index, Some(2079.96));
        assert_eq!(row.previous_index, Some(1985.0));
        assert_eq!(row.weekly_change.color_class.as_deref(), Some("text-red-500"));
    }

    #[test]
    fn empty_current_index_reads_as_none() {
        let row: TableRow =
            serde_json::from_str(r#"{"route":"KCCI_미주서안","current_index":""}"#).unwrap();
        assert_eq!(row.current_index, None);
        assert!(row.weekly_change.value.is_none());
    }

    #[test]
    fn time_series_record_flattens_route_fields() {
        let record: TimeSeriesRecord = serde_json::from_str(
            r#"{"date":"2024-01-01","KCCI_종합지수":1000.0,"KCCI_유럽":null}"#,
        )
        .unwrap();
        assert_eq!(record.value("KCCI_종합지수"), Some(1000.0));
        assert_eq!(record.value("KCCI_유럽"), None);
        assert_eq!(record.value("KCCI_중동"), None);
    }

    #[test]
    fn exchange_rate_accepts_both_spellings() {
        let canonical: ExchangeRatePoint =
            serde_json::from_str(r#"{"date":"2025-07-21","USD":1391.2}"#).unwrap();
        let legacy: ExchangeRatePoint =
            serde_json::from_str(r#"{"date":"2025-07-21","rate":1391.2}"#).unwrap();
        assert_eq!(canonical, legacy);
    }

    #[test]
    fn weather_accepts_crawler_field_names() {
        let weather: WeatherData = serde_json::from_str(
            r#"{"current_weather":{"LA_WeatherStatus":"Clear","LA_Temperature":24.3},
                "forecast_weather":[{"date":"2025-07-22","min_temp":17.0,"max_temp":28.0,"status":"Sunny","icon":"01d"}]}"#,
        )
        .unwrap();
        assert_eq!(weather.current.status.as_deref(), Some("Clear"));
        assert_eq!(weather.current.temperature, Some(24.3));
        assert_eq!(weather.forecast.len(), 1);
    }
}
