//! Weather dataset access.
//!
//! The repository owns the dataset loaded at startup and answers every query
//! with a well-formed value, whatever the file contained.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::tables::month_name;
use crate::types::{
    CurrentConditions, DailyForecastEntry, FormatError, HourlyEntry, LoadError, RenderItemError,
};

/// Weather records keyed by city name, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    cities: Map<String, Value>,
}

impl Dataset {
    /// Build a dataset from an already parsed JSON value
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(cities) => Some(Self { cities }),
            _ => None,
        }
    }

    /// Read and parse a dataset file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_path_buf())
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let value: Value = serde_json::from_str(&contents).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_value(value).ok_or_else(|| LoadError::NotAnObject(path.to_path_buf()))
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// City names in ordinal (case-sensitive) order
    pub fn city_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.cities.keys().cloned().collect();
        names.sort();
        names
    }

    fn section(&self, city: &str, key: &str) -> Option<&Value> {
        self.cities.get(city)?.as_object()?.get(key)
    }
}

/// Read-only access to the weather dataset with documented defaults
#[derive(Debug, Default)]
pub struct WeatherRepository {
    dataset: Dataset,
    source: Option<PathBuf>,
    load_warning: Option<LoadError>,
}

impl WeatherRepository {
    /// Load the dataset from `path`.
    ///
    /// Never fails: a missing or malformed file yields an empty repository
    /// and the error is kept for [`WeatherRepository::load_warning`].
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Dataset::from_file(path) {
            Ok(dataset) => {
                tracing::info!(
                    "Loaded weather data for {} cities from {}",
                    dataset.len(),
                    path.display()
                );
                Self {
                    dataset,
                    source: Some(path.to_path_buf()),
                    load_warning: None,
                }
            }
            Err(e) => {
                tracing::warn!("{}. Starting with empty dataset.", e);
                Self {
                    dataset: Dataset::default(),
                    source: Some(path.to_path_buf()),
                    load_warning: Some(e),
                }
            }
        }
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset,
            source: None,
            load_warning: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The error recovered from during [`WeatherRepository::load`], if any
    pub fn load_warning(&self) -> Option<&LoadError> {
        self.load_warning.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn cities(&self) -> Vec<String> {
        self.dataset.city_names()
    }

    /// Current conditions, or the zero/cloudy default when absent
    pub fn current_of(&self, city: &str) -> CurrentConditions {
        let Some(value) = self.dataset.section(city, "current") else {
            return CurrentConditions::default();
        };
        if !value.is_object() {
            tracing::warn!("Current conditions for {} are not an object", city);
            return CurrentConditions::default();
        }

        decode(value).unwrap_or_else(|e| {
            tracing::warn!("Malformed current conditions for {}: {}", city, e);
            CurrentConditions::default()
        })
    }

    /// Hourly entries in file order. Entries that cannot be decoded are
    /// skipped so the rest of the strip still renders.
    pub fn hourly_of(&self, city: &str) -> Vec<HourlyEntry> {
        let Some(Value::Object(slots)) = self.dataset.section(city, "hourly") else {
            return Vec::new();
        };

        slots
            .iter()
            .filter_map(|(time, value)| {
                match decode::<HourlyEntry>(value) {
                    Ok(mut entry) => {
                        entry.time = time.clone();
                        Some(entry)
                    }
                    Err(source) => {
                        let err = RenderItemError::MalformedHourly {
                            time: time.clone(),
                            source,
                        };
                        tracing::warn!("Skipping hourly entry for {}: {}", city, err);
                        None
                    }
                }
            })
            .collect()
    }

    /// Per-city forecast table in file order
    pub fn daily_of(&self, city: &str) -> Vec<DailyForecastEntry> {
        let Some(Value::Object(days)) = self.dataset.section(city, "forecast") else {
            return Vec::new();
        };

        days.iter()
            .filter_map(|(date, value)| match decode::<DailyForecastEntry>(value) {
                Ok(mut entry) => {
                    entry.date = date.clone();
                    Some(entry)
                }
                Err(e) => {
                    tracing::warn!("Skipping forecast day {} for {}: {}", date, city, e);
                    None
                }
            })
            .collect()
    }
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value.clone())
}

/// A parsed `YYYY-MM-DD` label ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLabel {
    pub day: u32,
    pub month: &'static str,
}

impl std::fmt::Display for DateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.month)
    }
}

/// Parse `YYYY-MM-DD` into a day number and genitive month name
pub fn parse_date_label(date: &str) -> Result<DateLabel, FormatError> {
    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(FormatError::WrongShape);
    };

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::WrongShape);
    }

    let month = month_name(month).ok_or_else(|| FormatError::UnknownMonth(month.to_string()))?;

    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::BadDay(day.to_string()));
    }
    let day_number: u32 = day
        .parse()
        .map_err(|_| FormatError::BadDay(day.to_string()))?;
    if !(1..=31).contains(&day_number) {
        return Err(FormatError::BadDay(day.to_string()));
    }

    Ok(DateLabel {
        day: day_number,
        month,
    })
}

/// Format `YYYY-MM-DD` as "<day> <month>", echoing anything else unchanged
pub fn format_date(date: &str) -> String {
    match parse_date_label(date) {
        Ok(label) => label.to_string(),
        Err(e) => {
            tracing::debug!("Leaving date {:?} unformatted: {}", date, e);
            date.to_string()
        }
    }
}
