//! Plain-text rendering of view models.

use std::io::{self, Write};

use pogoda_weather::{DailyRow, HourlyCard, ViewModel};

use crate::city_list::{CityList, RowStyle};
use pogoda_weather::composer::NO_DATA_TEXT;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn render(&self, view: &ViewModel, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "[фон {}]", view.background)?;
        writeln!(out, "{}", view.header)?;

        let current = &view.current;
        writeln!(out, "{} {}", current.temperature, current.icon)?;
        writeln!(out, "{}", current.summary)?;
        writeln!(
            out,
            "ОЩУЩАЕТСЯ {} | ВЕТЕР {} | ДАВЛЕНИЕ {} | ВЛАЖНОСТЬ {}",
            current.feels_like, current.wind, current.pressure, current.humidity
        )?;
        writeln!(out, "{}", current.tip)?;

        writeln!(out)?;
        writeln!(out, "{}", view.hourly_title)?;
        for card in &view.hourly {
            match card {
                HourlyCard::Slot {
                    time,
                    icon,
                    temperature,
                    precipitation,
                } => writeln!(out, "  {time}  {icon}  {temperature}  {precipitation}")?,
                HourlyCard::NoData => writeln!(out, "  {}", NO_DATA_TEXT)?,
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", view.daily_title)?;
        for row in &view.daily {
            match row {
                DailyRow::Day {
                    date,
                    icon,
                    temperature,
                } => writeln!(out, "  {date:<12} {icon}  {temperature}")?,
                DailyRow::NoData => writeln!(out, "  {}", NO_DATA_TEXT)?,
            }
        }

        Ok(())
    }

    /// Numbered city list; `>` marks the selection, `*` the hovered row.
    /// Each row ends with its background colour.
    pub fn render_city_list(&self, list: &CityList, out: &mut impl Write) -> io::Result<()> {
        for row in list.rows() {
            let marker = match row.style {
                RowStyle::Selected => '>',
                RowStyle::Hovered => '*',
                RowStyle::Normal => ' ',
            };
            writeln!(
                out,
                "{} {:>2}. {}  [{}]",
                marker,
                row.index + 1,
                row.name,
                row.style.background()
            )?;
        }
        Ok(())
    }
}
