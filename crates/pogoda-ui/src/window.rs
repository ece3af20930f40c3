//! Terminal window: routes input events to the presenter and redraws
//! whenever the selection changes.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use anyhow::Result;
use pogoda_core::AppError;
use pogoda_weather::{ViewModel, WeatherPresenter};

use crate::city_list::CityList;
use crate::error_mapping;
use crate::render::TextRenderer;

/// Input events the window understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Row clicked in the city list (zero-based)
    Click(usize),
    Enter(usize),
    Leave(usize),
    ListCities,
    Redraw,
    Help,
    Quit,
}

const HELP: &str = "Команды: <номер> — выбрать город, l — список, r — обновить, q — выход";

/// Parse one line of user input.
///
/// City numbers are one-based as printed by the list.
pub fn parse_command(line: &str) -> Option<UiEvent> {
    let line = line.trim();
    match line {
        "q" | "quit" => return Some(UiEvent::Quit),
        "l" | "list" => return Some(UiEvent::ListCities),
        "r" | "redraw" => return Some(UiEvent::Redraw),
        "h" | "help" | "?" => return Some(UiEvent::Help),
        _ => {}
    }

    if let Some(rest) = line.strip_prefix('+') {
        return one_based(rest).map(UiEvent::Enter);
    }
    if let Some(rest) = line.strip_prefix('-') {
        return one_based(rest).map(UiEvent::Leave);
    }
    one_based(line).map(UiEvent::Click)
}

fn one_based(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok()?.checked_sub(1)
}

pub struct WeatherWindow {
    title: String,
    presenter: WeatherPresenter,
    city_list: CityList,
    renderer: TextRenderer,
    pending: Rc<RefCell<Option<ViewModel>>>,
}

impl WeatherWindow {
    pub fn new(mut presenter: WeatherPresenter, title: &str) -> Self {
        let pending = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&pending);
        presenter.on_change(move |view: &ViewModel| {
            *sink.borrow_mut() = Some(view.clone());
        });

        let city_list = CityList::new(presenter.list_cities(), presenter.current_city());

        Self {
            title: title.to_string(),
            presenter,
            city_list,
            renderer: TextRenderer,
            pending,
        }
    }

    /// The load failure to show once at startup, if any
    pub fn startup_warning(&self) -> Option<AppError> {
        self.presenter.load_warning().map(error_mapping::load_error)
    }

    pub fn presenter(&self) -> &WeatherPresenter {
        &self.presenter
    }

    pub fn city_list(&self) -> &CityList {
        &self.city_list
    }

    /// Draw the initial screen
    pub fn open(&mut self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "== {} ==", self.title)?;
        if let Some(warning) = self.startup_warning() {
            tracing::warn!("{}", warning);
            writeln!(out, "{}: {}", warning.title(), warning.user_message())?;
        }
        self.renderer.render_city_list(&self.city_list, out)?;
        writeln!(out)?;
        self.renderer.render(&self.presenter.compose_current(), out)?;
        writeln!(out, "{}", HELP)?;
        Ok(())
    }

    /// Handle one event. Returns `false` once the window should close.
    pub fn handle(&mut self, event: UiEvent, out: &mut impl Write) -> Result<bool> {
        match event {
            UiEvent::Click(index) => match self.city_list.click(index) {
                Some(city) => {
                    self.presenter.select(&city);
                }
                None => writeln!(out, "Нет города с номером {}", index + 1)?,
            },
            UiEvent::Enter(index) => {
                self.city_list.enter(index);
                self.renderer.render_city_list(&self.city_list, out)?;
            }
            UiEvent::Leave(index) => {
                self.city_list.leave(index);
                self.renderer.render_city_list(&self.city_list, out)?;
            }
            UiEvent::ListCities => self.renderer.render_city_list(&self.city_list, out)?,
            UiEvent::Redraw => self.renderer.render(&self.presenter.compose_current(), out)?,
            UiEvent::Help => writeln!(out, "{}", HELP)?,
            UiEvent::Quit => return Ok(false),
        }

        self.flush_pending(out)?;
        Ok(true)
    }

    /// Draw the view model delivered by the last selection change
    fn flush_pending(&mut self, out: &mut impl Write) -> Result<()> {
        let Some(view) = self.pending.borrow_mut().take() else {
            return Ok(());
        };
        self.city_list.set_current(&view.city);
        writeln!(out)?;
        self.renderer.render(&view, out)?;
        Ok(())
    }
}

impl std::fmt::Debug for WeatherWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherWindow")
            .field("title", &self.title)
            .field("presenter", &self.presenter)
            .field("city_list", &self.city_list)
            .finish()
    }
}
