//! Text front end for the Pogoda weather pipeline.

pub mod city_list;
pub mod error_mapping;
pub mod render;
pub mod window;

pub use city_list::{CityList, CityRow, RowStyle};
pub use render::TextRenderer;
pub use window::{parse_command, UiEvent, WeatherWindow};
