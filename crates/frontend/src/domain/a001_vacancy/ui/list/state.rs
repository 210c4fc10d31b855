use contracts::shared::catalog_filter::{FilterCriteria, ALL_SENTINEL};
use serde::{Deserialize, Serialize};

use crate::config::PAGE_SIZE;

/// Ключ состояния каталога в `AppGlobalContext::form_states`
pub const FORM_KEY: &str = "a001_vacancy--list";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacancyListState {
    pub category: String,
    pub location: String,
    pub search: String,
    pub page: usize,
    pub page_size: usize,
    pub filters_expanded: bool,
}

impl Default for VacancyListState {
    fn default() -> Self {
        Self {
            category: ALL_SENTINEL.to_string(),
            location: ALL_SENTINEL.to_string(),
            search: String::new(),
            page: 1,
            page_size: PAGE_SIZE,
            filters_expanded: true,
        }
    }
}

impl VacancyListState {
    /// Поле поиска обрезается здесь: пробелы по краям ввода не являются частью запроса
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_raw(&self.category, &self.location, self.search.trim())
    }

    pub fn search_term(&self) -> &str {
        self.search.trim()
    }

    /// Любое изменение фильтров возвращает на первую страницу
    pub fn reset_filters(&mut self) {
        self.category = ALL_SENTINEL.to_string();
        self.location = ALL_SENTINEL.to_string();
        self.search.clear();
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::catalog_filter::{CategoryFilter, LocationFilter};

    #[test]
    fn test_default_state_has_no_constraints() {
        let state = VacancyListState::default();
        assert_eq!(state.criteria().active_count(), 0);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, PAGE_SIZE);
    }

    #[test]
    fn test_criteria_from_state() {
        let state = VacancyListState {
            category: "it".into(),
            location: "abroad".into(),
            search: "rust".into(),
            ..VacancyListState::default()
        };
        let criteria = state.criteria();
        assert_eq!(criteria.category, CategoryFilter::Tag("it".into()));
        assert_eq!(criteria.location, LocationFilter::Abroad);
        assert_eq!(criteria.active_count(), 3);
    }

    #[test]
    fn test_search_input_is_trimmed_before_filtering() {
        let padded = VacancyListState {
            search: "  rust ".into(),
            ..VacancyListState::default()
        };
        assert_eq!(padded.criteria().search_term.as_deref(), Some("rust"));
        assert_eq!(padded.search_term(), "rust");

        let blank = VacancyListState {
            search: "   ".into(),
            ..VacancyListState::default()
        };
        assert_eq!(blank.criteria().active_count(), 0);
    }

    #[test]
    fn test_reset_filters_keeps_page_size() {
        let mut state = VacancyListState {
            category: "design".into(),
            page: 3,
            page_size: 18,
            ..VacancyListState::default()
        };
        state.reset_filters();
        assert_eq!(state.category, ALL_SENTINEL);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 18);
    }
}
