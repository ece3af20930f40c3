//! Builds the display-ready view model for one city.
//!
//! `compose` only reads from the repository and the static lookup tables, so
//! composing the same city twice yields identical view models.

use chrono::NaiveDate;

use crate::repository::{format_date, WeatherRepository};
use crate::selection::NO_DATA_CITY;
use crate::types::{Condition, CurrentConditions, HourlyEntry, RenderItemError};

/// Placeholder entry text for empty sections
pub const NO_DATA_TEXT: &str = "Нет данных";
/// Value shown for current-condition details of the placeholder city
pub const NOT_AVAILABLE: &str = "Н/Д";
/// Pressure is not part of the dataset; this figure is always shown.
pub const PRESSURE_TEXT: &str = "743 мм рт. ст.";
pub const HOURLY_TITLE: &str = "Почасовой прогноз";
pub const DAILY_TITLE: &str = "Прогноз на 14 дней";

const SUMMARY_TEXT: &str = "Пасмурно, в ближайшие 2 часа осадков не ожидается";
const NO_DATA_SUMMARY: &str = "Данные отсутствуют";

/// One day of the illustrative 14-day outlook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastSeed {
    pub date: &'static str,
    pub temperature: i32,
    pub condition: &'static str,
}

const fn seed(date: &'static str, temperature: i32, condition: &'static str) -> ForecastSeed {
    ForecastSeed {
        date,
        temperature,
        condition,
    }
}

/// The 14-day outlook shown for every city. It does not come from the
/// dataset's `forecast` table.
// TODO: render `WeatherRepository::daily_of` once datasets carry 14 days per city
pub const ILLUSTRATIVE_FORECAST: [ForecastSeed; 14] = [
    seed("2025-04-15", 16, "clear"),
    seed("2025-04-16", 14, "cloudy"),
    seed("2025-04-17", 12, "rain"),
    seed("2025-04-18", 10, "snow"),
    seed("2025-04-19", 13, "partly-cloudy"),
    seed("2025-04-20", 15, "clear"),
    seed("2025-04-21", 17, "clear"),
    seed("2025-04-22", 11, "cloudy"),
    seed("2025-04-23", 13, "partly-cloudy"),
    seed("2025-04-24", 18, "clear"),
    seed("2025-04-25", 19, "rain"),
    seed("2025-04-26", 16, "snow"),
    seed("2025-04-27", 14, "partly-cloudy"),
    seed("2025-04-28", 12, "cloudy"),
];

/// Fully resolved screen contents for one city
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// City name exactly as selected
    pub city: String,
    pub header: String,
    pub current: CurrentView,
    pub hourly_title: &'static str,
    pub hourly: Vec<HourlyCard>,
    pub daily_title: &'static str,
    pub daily: Vec<DailyRow>,
    /// Background colour, `#RRGGBB`
    pub background: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentView {
    pub temperature: String,
    pub icon: &'static str,
    pub summary: &'static str,
    pub feels_like: String,
    pub wind: String,
    pub pressure: String,
    pub humidity: String,
    pub tip: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HourlyCard {
    Slot {
        time: String,
        icon: &'static str,
        temperature: String,
        precipitation: String,
    },
    NoData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DailyRow {
    Day {
        date: String,
        icon: &'static str,
        temperature: String,
    },
    NoData,
}

/// Resolve everything the renderer needs for `city`
pub fn compose(city: &str, repository: &WeatherRepository) -> ViewModel {
    let no_data = city == NO_DATA_CITY;
    let current = repository.current_of(city);

    ViewModel {
        city: city.to_string(),
        header: format!("ПОГОДА В {}", city.to_uppercase()),
        current: compose_current(&current, no_data),
        hourly_title: HOURLY_TITLE,
        hourly: compose_hourly(repository.hourly_of(city)),
        daily_title: DAILY_TITLE,
        daily: compose_forecast(&ILLUSTRATIVE_FORECAST, no_data),
        background: current.condition.gradient().start,
    }
}

fn compose_current(current: &CurrentConditions, no_data: bool) -> CurrentView {
    let detail = |value: String| {
        if no_data {
            NOT_AVAILABLE.to_string()
        } else {
            value
        }
    };

    CurrentView {
        temperature: signed_degrees(current.temperature),
        icon: current.condition.icon(),
        summary: if no_data { NO_DATA_SUMMARY } else { SUMMARY_TEXT },
        // Not a wind-chill model; always one degree below the reading.
        feels_like: detail(signed_degrees(current.temperature.saturating_sub(1))),
        wind: detail(format!("{} м/с", current.wind)),
        pressure: detail(PRESSURE_TEXT.to_string()),
        humidity: detail(format!("{}%", current.humidity)),
        tip: current.condition.tip(),
    }
}

fn compose_hourly(entries: Vec<HourlyEntry>) -> Vec<HourlyCard> {
    if entries.is_empty() {
        return vec![HourlyCard::NoData];
    }

    entries
        .into_iter()
        .map(|entry| HourlyCard::Slot {
            icon: entry.condition.icon(),
            temperature: signed_degrees(entry.temperature),
            precipitation: format!("Осадки: {}", entry.precipitation),
            time: entry.time,
        })
        .collect()
}

/// Resolve forecast rows, skipping any day that fails to resolve
pub fn compose_forecast(seeds: &[ForecastSeed], no_data: bool) -> Vec<DailyRow> {
    if no_data {
        return vec![DailyRow::NoData];
    }

    seeds
        .iter()
        .filter_map(|seed| match resolve_day(seed) {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::warn!("Error rendering forecast day: {}", e);
                None
            }
        })
        .collect()
}

fn resolve_day(seed: &ForecastSeed) -> Result<DailyRow, RenderItemError> {
    NaiveDate::parse_from_str(seed.date, "%Y-%m-%d").map_err(|source| {
        RenderItemError::InvalidDate {
            date: seed.date.to_string(),
            source,
        }
    })?;

    Ok(DailyRow::Day {
        date: format_date(seed.date),
        icon: Condition::from_code(seed.condition).icon(),
        temperature: signed_degrees(seed.temperature),
    })
}

fn signed_degrees(value: i32) -> String {
    format!("{:+}°", value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::repository::Dataset;
    use crate::tables::DEFAULT_BACKGROUND;
    use serde_json::json;

    fn moscow() -> WeatherRepository {
        WeatherRepository::from_dataset(
            Dataset::from_value(json!({
                "Москва": {
                    "current": { "temp": 10, "condition": "rain", "wind": 4, "humidity": 81 },
                    "hourly": {
                        "12:00": { "temp": 9, "condition": "rain", "precipitation": "70%" },
                        "15:00": { "temp": -2, "condition": "snow", "precipitation": "30%" }
                    }
                }
            }))
            .unwrap(),
        )
    }

    #[test]
    fn test_header_uppercases_city() {
        let view = compose("Москва", &moscow());
        assert_eq!(view.header, "ПОГОДА В МОСКВА");
        assert_eq!(view.city, "Москва");
    }

    #[test]
    fn test_current_block() {
        let view = compose("Москва", &moscow());
        assert_eq!(view.current.temperature, "+10°");
        assert_eq!(view.current.icon, "🌧️");
        assert_eq!(view.current.feels_like, "+9°");
        assert_eq!(view.current.wind, "4 м/с");
        assert_eq!(view.current.pressure, PRESSURE_TEXT);
        assert_eq!(view.current.humidity, "81%");
        assert_eq!(view.current.tip, Condition::Rain.tip());
        assert_eq!(view.current.summary, SUMMARY_TEXT);
    }

    #[test]
    fn test_background_follows_condition() {
        let view = compose("Москва", &moscow());
        assert_eq!(view.background, Condition::Rain.gradient().start);
    }

    #[test]
    fn test_hourly_cards_in_order() {
        let view = compose("Москва", &moscow());
        assert_eq!(
            view.hourly,
            vec![
                HourlyCard::Slot {
                    time: "12:00".to_string(),
                    icon: "🌧️",
                    temperature: "+9°".to_string(),
                    precipitation: "Осадки: 70%".to_string(),
                },
                HourlyCard::Slot {
                    time: "15:00".to_string(),
                    icon: "❄️",
                    temperature: "-2°".to_string(),
                    precipitation: "Осадки: 30%".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_city_uses_defaults() {
        let view = compose("Атлантида", &moscow());
        assert_eq!(view.current.temperature, "+0°");
        assert_eq!(view.current.feels_like, "-1°");
        assert_eq!(view.current.icon, Condition::Cloudy.icon());
        assert_eq!(view.hourly, vec![HourlyCard::NoData]);
        assert_eq!(view.daily.len(), 14);
        assert_eq!(view.background, Condition::Cloudy.gradient().start);
    }

    #[test]
    fn test_all_malformed_hourly_entries_collapse_to_no_data() {
        let repo = WeatherRepository::from_dataset(
            Dataset::from_value(json!({
                "Москва": {
                    "current": { "temp": 10, "condition": "rain", "wind": 4, "humidity": 81 },
                    "hourly": {
                        "12:00": { "condition": "rain" },
                        "13:00": { "temp": "cold", "condition": "snow" },
                        "14:00": "rain"
                    }
                }
            }))
            .unwrap(),
        );
        let view = compose("Москва", &repo);
        assert_eq!(view.hourly, vec![HourlyCard::NoData]);
        assert_eq!(view.current.temperature, "+10°");
        assert_eq!(view.daily.len(), 14);
    }

    #[test]
    fn test_fractional_temperatures_keep_condition_and_strip() {
        let repo = WeatherRepository::from_dataset(
            Dataset::from_value(json!({
                "Москва": {
                    "current": { "temp": 10.0, "condition": "rain", "wind": 3, "humidity": 80 },
                    "hourly": { "14:00": { "temp": 9.5, "condition": "rain", "precipitation": "70%" } }
                }
            }))
            .unwrap(),
        );
        let view = compose("Москва", &repo);
        assert_eq!(view.current.temperature, "+10°");
        assert_eq!(view.current.humidity, "80%");
        assert_eq!(view.background, Condition::Rain.gradient().start);
        assert_eq!(
            view.hourly,
            vec![HourlyCard::Slot {
                time: "14:00".to_string(),
                icon: "🌧️",
                temperature: "+10°".to_string(),
                precipitation: "Осадки: 70%".to_string(),
            }]
        );
    }

    #[test]
    fn test_placeholder_city() {
        let view = compose(NO_DATA_CITY, &WeatherRepository::default());
        assert_eq!(view.current.summary, NO_DATA_SUMMARY);
        assert_eq!(view.current.feels_like, NOT_AVAILABLE);
        assert_eq!(view.current.wind, NOT_AVAILABLE);
        assert_eq!(view.current.pressure, NOT_AVAILABLE);
        assert_eq!(view.current.humidity, NOT_AVAILABLE);
        assert_eq!(view.hourly, vec![HourlyCard::NoData]);
        assert_eq!(view.daily, vec![DailyRow::NoData]);
    }

    #[test]
    fn test_forecast_has_fourteen_formatted_days() {
        let rows = compose_forecast(&ILLUSTRATIVE_FORECAST, false);
        assert_eq!(rows.len(), 14);
        assert_eq!(
            rows[0],
            DailyRow::Day {
                date: "15 апреля".to_string(),
                icon: "☀️",
                temperature: "+16°".to_string(),
            }
        );
        assert_eq!(
            rows[13],
            DailyRow::Day {
                date: "28 апреля".to_string(),
                icon: "☁️",
                temperature: "+12°".to_string(),
            }
        );
    }

    #[test]
    fn test_forecast_skips_unresolvable_day() {
        let mut seeds = ILLUSTRATIVE_FORECAST;
        seeds[5] = seed("2025-02-30", 15, "clear");
        let rows = compose_forecast(&seeds, false);
        assert_eq!(rows.len(), 13);
        assert!(!rows.iter().any(|row| matches!(
            row,
            DailyRow::Day { date, .. } if date.contains("2025-02-30") || date == "30 февраля"
        )));
    }

    #[test]
    fn test_unknown_forecast_condition_uses_fallback_icon() {
        let seeds = [seed("2025-04-15", 3, "hail")];
        let rows = compose_forecast(&seeds, false);
        assert!(matches!(&rows[0], DailyRow::Day { icon, .. } if *icon == "⛅"));
    }

    #[test]
    fn test_compose_is_idempotent() {
        let repo = moscow();
        assert_eq!(compose("Москва", &repo), compose("Москва", &repo));
    }

    #[test]
    fn test_fallback_background_for_unknown_condition() {
        let repo = WeatherRepository::from_dataset(
            Dataset::from_value(json!({ "Омск": { "current": { "condition": "fog" } } })).unwrap(),
        );
        assert_eq!(compose("Омск", &repo).background, DEFAULT_BACKGROUND);
    }
}
