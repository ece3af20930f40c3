//! Centralized error types for the Pogoda application.
//!
//! This module provides a typed error hierarchy that:
//! - Lets the UI show a short, non-technical message for every failure
//! - Preserves full error context for logging

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather data error: {0}")]
    Weather(#[from] WeatherError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
        }
    }

    /// Title for the warning shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Weather(WeatherError::DataNotFound(_)) => "Предупреждение",
            _ => "Ошибка",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Configuration file could not be read: {0}")]
    Unreadable(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Файл настроек не найден. Используются значения по умолчанию.",
            ConfigError::Unreadable(_) => {
                "Не удалось прочитать файл настроек. Используются значения по умолчанию."
            }
            ConfigError::Invalid(_) => "Настройки некорректны. Используются значения по умолчанию.",
            ConfigError::ParseError(_) => {
                "Файл настроек повреждён. Используются значения по умолчанию."
            }
        }
    }
}

/// Weather dataset errors. All of them leave the app running with no data.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather data file not found: {0}")]
    DataNotFound(String),

    #[error("Weather data file is malformed: {0}")]
    DataMalformed(String),

    #[error("Weather data file could not be read: {0}")]
    DataUnreadable(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::DataNotFound(_) => {
                "Файл данных о погоде не найден. Приложение запустится с пустым набором данных."
            }
            WeatherError::DataMalformed(_) => {
                "Неверный формат файла данных о погоде. Приложение запустится с пустым набором данных."
            }
            WeatherError::DataUnreadable(_) => {
                "Не удалось прочитать файл данных о погоде. Приложение запустится с пустым набором данных."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors = [
            AppError::Config(ConfigError::NotFound("config.toml".into())),
            AppError::Config(ConfigError::Unreadable("config.toml".into())),
            AppError::Config(ConfigError::Invalid("test".into())),
            AppError::Config(ConfigError::ParseError("test".into())),
            AppError::Weather(WeatherError::DataNotFound("weather_data.json".into())),
            AppError::Weather(WeatherError::DataMalformed("weather_data.json".into())),
            AppError::Weather(WeatherError::DataUnreadable("weather_data.json".into())),
        ];

        for error in &errors {
            assert!(!error.user_message().is_empty());
            assert!(!error.title().is_empty());
        }
    }

    #[test]
    fn test_app_error_conversion() {
        let weather_err = WeatherError::DataMalformed("x".into());
        let app_err: AppError = weather_err.into();
        assert!(matches!(app_err, AppError::Weather(WeatherError::DataMalformed(_))));
    }

    #[test]
    fn test_config_error_conversion() {
        let app_err: AppError = ConfigError::Invalid("data.file".into()).into();
        assert!(matches!(app_err, AppError::Config(ConfigError::Invalid(_))));
        assert_eq!(app_err.title(), "Ошибка");
        assert!(app_err.user_message().contains("по умолчанию"));
    }

    #[test]
    fn test_missing_data_is_a_warning() {
        let app_err = AppError::Weather(WeatherError::DataNotFound("x".into()));
        assert_eq!(app_err.title(), "Предупреждение");
        assert!(app_err.user_message().contains("пустым набором"));
    }
}
