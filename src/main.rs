use std::io::{self, BufRead, Write};

use anyhow::Result;
use pogoda_ui::{parse_command, UiEvent, WeatherWindow};
use pogoda_weather::{WeatherPresenter, WeatherRepository};

fn main() -> Result<()> {
    // Initialize core
    pogoda_core::init()?;

    let mut app = pogoda_core::App::new_or_default();

    // One synchronous load before the window becomes interactive
    let repository = WeatherRepository::load(app.data_path());
    let presenter = WeatherPresenter::new(repository);
    let mut window = WeatherWindow::new(presenter, &app.config().ui.title);

    tracing::info!("Pogoda started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    window.open(&mut out)?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let event = parse_command(&line).unwrap_or(UiEvent::Help);
        if !window.handle(event, &mut out)? {
            break;
        }
        out.flush()?;
    }

    // Graceful shutdown
    app.shutdown()?;

    Ok(())
}
