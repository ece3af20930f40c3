//! Weather presentation pipeline for Pogoda
//!
//! Loads the static weather dataset, tracks the selected city, and turns raw
//! records into display-ready view models.

pub mod composer;
pub mod presenter;
pub mod repository;
pub mod selection;
pub mod tables;
pub mod types;

pub use composer::{compose, CurrentView, DailyRow, HourlyCard, ViewModel};
pub use presenter::{PipelineState, WeatherPresenter};
pub use repository::{format_date, parse_date_label, Dataset, DateLabel, WeatherRepository};
pub use selection::{SelectionState, NO_DATA_CITY};
pub use tables::{month_name, Gradient, DEFAULT_BACKGROUND};
pub use types::*;
