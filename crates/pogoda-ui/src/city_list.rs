//! City picker state: which row is selected and which one is hovered.

pub const NORMAL_BG: &str = "#2C2C2C";
pub const HOVER_BG: &str = "#4A4A4A";
pub const SELECTED_BG: &str = "#3B82F6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Normal,
    Hovered,
    Selected,
}

impl RowStyle {
    pub fn background(self) -> &'static str {
        match self {
            RowStyle::Normal => NORMAL_BG,
            RowStyle::Hovered => HOVER_BG,
            RowStyle::Selected => SELECTED_BG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityRow<'a> {
    pub index: usize,
    pub name: &'a str,
    pub style: RowStyle,
}

#[derive(Debug, Clone)]
pub struct CityList {
    cities: Vec<String>,
    current: String,
    hovered: Option<usize>,
}

impl CityList {
    pub fn new(cities: Vec<String>, current: &str) -> Self {
        Self {
            cities,
            current: current.to_string(),
            hovered: None,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn rows(&self) -> Vec<CityRow<'_>> {
        self.cities
            .iter()
            .enumerate()
            .map(|(index, name)| CityRow {
                index,
                name,
                style: self.style_of(index, name),
            })
            .collect()
    }

    fn style_of(&self, index: usize, name: &str) -> RowStyle {
        if name == self.current {
            RowStyle::Selected
        } else if self.hovered == Some(index) {
            RowStyle::Hovered
        } else {
            RowStyle::Normal
        }
    }

    /// Pointer entered row `index`. The selected row keeps its colour.
    pub fn enter(&mut self, index: usize) {
        if index < self.cities.len() {
            self.hovered = Some(index);
        }
    }

    /// Pointer left row `index`
    pub fn leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Row `index` was clicked. Returns the city it stands for so the caller
    /// can route the selection.
    pub fn click(&mut self, index: usize) -> Option<String> {
        let city = self.cities.get(index)?.clone();
        self.current = city.clone();
        Some(city)
    }

    /// Highlight `city` without a click (e.g. selection from elsewhere)
    pub fn set_current(&mut self, city: &str) {
        self.current = city.to_string();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    fn list() -> CityList {
        CityList::new(
            vec!["Анапа".to_string(), "Москва".to_string(), "Сочи".to_string()],
            "Анапа",
        )
    }

    fn styles(list: &CityList) -> Vec<RowStyle> {
        list.rows().iter().map(|row| row.style).collect()
    }

    #[test]
    fn test_initial_selection_highlighted() {
        let list = list();
        assert_eq!(
            styles(&list),
            vec![RowStyle::Selected, RowStyle::Normal, RowStyle::Normal]
        );
        assert_eq!(list.rows()[0].style.background(), SELECTED_BG);
    }

    #[test]
    fn test_click_returns_row_city() {
        let mut list = list();
        assert_eq!(list.click(2), Some("Сочи".to_string()));
        assert_eq!(list.current(), "Сочи");
        assert_eq!(
            styles(&list),
            vec![RowStyle::Normal, RowStyle::Normal, RowStyle::Selected]
        );
    }

    #[test]
    fn test_click_out_of_range() {
        let mut list = list();
        assert_eq!(list.click(7), None);
        assert_eq!(list.current(), "Анапа");
    }

    #[test]
    fn test_hover_does_not_repaint_selected_row() {
        let mut list = list();
        list.enter(0);
        assert_eq!(list.rows()[0].style, RowStyle::Selected);

        list.enter(1);
        assert_eq!(list.rows()[1].style, RowStyle::Hovered);
        assert_eq!(list.rows()[1].style.background(), HOVER_BG);

        list.leave(1);
        assert_eq!(list.rows()[1].style, RowStyle::Normal);
    }

    #[test]
    fn test_leave_other_row_keeps_hover() {
        let mut list = list();
        list.enter(1);
        list.leave(2);
        assert_eq!(list.rows()[1].style, RowStyle::Hovered);
    }
}
