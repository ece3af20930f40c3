use std::path::PathBuf;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Weather condition codes as they appear in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Clear,
    PartlyCloudy,
    #[default]
    Cloudy,
    Rain,
    Snow,
    /// Any code outside the known set. Kept verbatim so it can be logged.
    Unknown(String),
}

impl Condition {
    /// Parse a dataset condition code. Never fails.
    pub fn from_code(code: &str) -> Self {
        match code {
            "clear" => Self::Clear,
            "partly-cloudy" => Self::PartlyCloudy,
            "cloudy" => Self::Cloudy,
            "rain" => Self::Rain,
            "snow" => Self::Snow,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The dataset code for this condition
    pub fn code(&self) -> &str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly-cloudy",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Unknown(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<String> for Condition {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<&str> for Condition {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.code().to_string()
    }
}

/// Current conditions for one city.
///
/// Each field decodes on its own: a field with the wrong type takes its
/// default without discarding the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Degrees Celsius
    #[serde(rename = "temp", default, deserialize_with = "lenient_whole_number")]
    pub temperature: i32,
    #[serde(default, deserialize_with = "lenient_condition")]
    pub condition: Condition,
    /// Metres per second
    #[serde(default, deserialize_with = "lenient_float")]
    pub wind: f64,
    /// Percent
    #[serde(default, deserialize_with = "lenient_whole_number")]
    pub humidity: i32,
}

impl Default for CurrentConditions {
    fn default() -> Self {
        Self {
            temperature: 0,
            condition: Condition::Cloudy,
            wind: 0.0,
            humidity: 0,
        }
    }
}

/// One slot of the hourly strip, keyed by its time label ("14:00")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    #[serde(skip)]
    pub time: String,
    #[serde(rename = "temp", deserialize_with = "whole_number")]
    pub temperature: i32,
    pub condition: Condition,
    /// Display label, e.g. "20%"
    #[serde(default = "missing_precipitation", deserialize_with = "label_from_any")]
    pub precipitation: String,
}

/// One day of the per-city forecast table, keyed by `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    #[serde(skip)]
    pub date: String,
    #[serde(rename = "temp", default, deserialize_with = "lenient_whole_number")]
    pub temperature: i32,
    #[serde(default, deserialize_with = "lenient_condition")]
    pub condition: Condition,
}

fn missing_precipitation() -> String {
    "—".to_string()
}

/// Round any JSON number to whole degrees/percent
fn number_to_i32(value: &serde_json::Value) -> Option<i32> {
    let n = value.as_f64().filter(|n| n.is_finite())?;
    Some(n.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32)
}

/// Accept integer or fractional numbers, rounding to the nearest whole value
fn whole_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    number_to_i32(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a number, got {}", value)))
}

fn lenient_whole_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(number_to_i32(&value).unwrap_or_else(|| {
        tracing::warn!("Expected a number, got {}; using 0", value);
        0
    }))
}

fn lenient_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|n| n.is_finite()).unwrap_or_else(|| {
        tracing::warn!("Expected a number, got {}; using 0", value);
        0.0
    }))
}

fn lenient_condition<'de, D>(deserializer: D) -> Result<Condition, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(code) => Condition::from(code),
        other => {
            tracing::warn!("Expected a condition code, got {}; using cloudy", other);
            Condition::default()
        }
    })
}

/// Accept a string or a bare number for a display label
fn label_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => missing_precipitation(),
        other => other.to_string(),
    })
}

/// Dataset load failures. Always recovered by the repository.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Weather data file not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read weather data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in weather data file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Weather data file {0} must contain a JSON object keyed by city")]
    NotAnObject(PathBuf),
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound(path) | Self::NotAnObject(path) => path.as_path(),
            Self::Io { path, .. } | Self::Parse { path, .. } => path.as_path(),
        }
    }
}

/// Why a date label could not be formatted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("expected YYYY-MM-DD")]
    WrongShape,
    #[error("unknown month code: {0}")]
    UnknownMonth(String),
    #[error("invalid day: {0}")]
    BadDay(String),
}

/// A single hourly slot or forecast day that could not be resolved
#[derive(Debug, thiserror::Error)]
pub enum RenderItemError {
    #[error("invalid forecast date {date}: {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("malformed hourly entry {time}: {source}")]
    MalformedHourly {
        time: String,
        #[source]
        source: serde_json::Error,
    },
}
