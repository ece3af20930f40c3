//! Active city selection.

/// Placeholder city used when the dataset has no cities
pub const NO_DATA_CITY: &str = "Нет данных";

/// Single-slot holder for the city currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    current: String,
}

impl SelectionState {
    /// Start on the first city in ordinal order, or on the "no data"
    /// placeholder when there are none.
    pub fn initial<S: AsRef<str>>(cities: &[S]) -> Self {
        let current = cities
            .iter()
            .map(|city| city.as_ref())
            .min()
            .unwrap_or(NO_DATA_CITY)
            .to_string();
        Self { current }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Replace the active city. Unknown cities are accepted as-is.
    pub fn select(&mut self, city: impl Into<String>) {
        let city = city.into();
        tracing::debug!("Selection changed: {} -> {}", self.current, city);
        self.current = city;
    }

    pub fn is_no_data(&self) -> bool {
        self.current == NO_DATA_CITY
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            current: NO_DATA_CITY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_first_in_ordinal_order() {
        let state = SelectionState::initial(&["Москва", "Анапа", "Сочи"]);
        assert_eq!(state.current(), "Анапа");
    }

    #[test]
    fn test_initial_ordinal_puts_uppercase_first() {
        let state = SelectionState::initial(&["berlin", "Zurich"]);
        assert_eq!(state.current(), "Zurich");
    }

    #[test]
    fn test_initial_empty_uses_placeholder() {
        let cities: [&str; 0] = [];
        let state = SelectionState::initial(&cities);
        assert_eq!(state.current(), NO_DATA_CITY);
        assert!(state.is_no_data());
    }

    #[test]
    fn test_select_accepts_unknown_city() {
        let mut state = SelectionState::initial(&["Москва"]);
        state.select("Атлантида");
        assert_eq!(state.current(), "Атлантида");
        assert!(!state.is_no_data());
    }

    #[test]
    fn test_default_is_placeholder() {
        assert!(SelectionState::default().is_no_data());
    }
}
