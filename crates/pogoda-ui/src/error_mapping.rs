//! Maps weather pipeline errors to pogoda_core::AppError for consistent
//! user-facing messages.

use pogoda_core::{AppError, WeatherError};
use pogoda_weather::LoadError;

pub fn load_error(e: &LoadError) -> AppError {
    let file = e.path().display().to_string();
    let mapped = match e {
        LoadError::NotFound(_) => WeatherError::DataNotFound(file),
        LoadError::Parse { .. } | LoadError::NotAnObject(_) => WeatherError::DataMalformed(file),
        LoadError::Io { .. } => WeatherError::DataUnreadable(file),
    };
    AppError::Weather(mapped)
}
