//! Entry point for the rendering layer.
//!
//! Ties the repository, the selection state, and the composer together and
//! notifies listeners whenever the selection changes.

use crate::composer::{compose, ViewModel};
use crate::repository::WeatherRepository;
use crate::selection::{SelectionState, NO_DATA_CITY};
use crate::types::LoadError;

/// Whether the session has any weather data at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Loaded,
    Empty,
}

type ChangeListener = Box<dyn FnMut(&ViewModel)>;

pub struct WeatherPresenter {
    repository: WeatherRepository,
    selection: SelectionState,
    listeners: Vec<ChangeListener>,
}

impl WeatherPresenter {
    pub fn new(repository: WeatherRepository) -> Self {
        let selection = SelectionState::initial(&repository.cities());
        tracing::debug!("Initial city: {}", selection.current());
        Self {
            repository,
            selection,
            listeners: Vec::new(),
        }
    }

    /// Cities for the picker, sorted. Falls back to the "no data"
    /// placeholder so the list is never empty.
    pub fn list_cities(&self) -> Vec<String> {
        let cities = self.repository.cities();
        if cities.is_empty() {
            vec![NO_DATA_CITY.to_string()]
        } else {
            cities
        }
    }

    pub fn current_city(&self) -> &str {
        self.selection.current()
    }

    pub fn state(&self) -> PipelineState {
        if self.repository.is_empty() {
            PipelineState::Empty
        } else {
            PipelineState::Loaded
        }
    }

    pub fn load_warning(&self) -> Option<&LoadError> {
        self.repository.load_warning()
    }

    pub fn repository(&self) -> &WeatherRepository {
        &self.repository
    }

    /// Register a callback run once per selection change with the new view
    pub fn on_change(&mut self, listener: impl FnMut(&ViewModel) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Make `city` the active city, recompose, and notify every listener.
    /// Returns the view model the listeners received.
    pub fn select(&mut self, city: &str) -> ViewModel {
        self.selection.select(city);
        let view = self.compose_current();
        for listener in &mut self.listeners {
            listener(&view);
        }
        view
    }

    /// View model for the active city
    pub fn compose_current(&self) -> ViewModel {
        compose(self.selection.current(), &self.repository)
    }
}

impl std::fmt::Debug for WeatherPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherPresenter")
            .field("repository", &self.repository)
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
