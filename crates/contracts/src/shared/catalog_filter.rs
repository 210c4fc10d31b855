//! Фильтрация каталога вакансий по категории, локации и поисковой строке.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::a001_vacancy::Vacancy;

/// Закрытый список городов, которые считаются "в Украине"
pub const DOMESTIC_CITIES: &[&str] = &["Київ", "Львів", "Одеса", "Харків", "Дніпро"];

/// Отметки удаленной работы в поле `location` (без учета регистра)
pub const REMOTE_MARKERS: &[&str] = &["віддалено", "remote"];

/// Значение-заглушка "все" в выпадающих списках
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    Any,
    Tag(String),
}

impl CategoryFilter {
    /// `"all"` или пустая строка означают отсутствие ограничения
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_SENTINEL {
            CategoryFilter::Any
        } else {
            CategoryFilter::Tag(value.to_string())
        }
    }

    fn matches(&self, vacancy: &Vacancy) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Tag(tag) => vacancy.has_category(tag),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationFilter {
    #[default]
    Any,
    Named(String),
    Remote,
    Abroad,
}

impl LocationFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | ALL_SENTINEL => LocationFilter::Any,
            "remote" => LocationFilter::Remote,
            "abroad" => LocationFilter::Abroad,
            city => LocationFilter::Named(city.to_string()),
        }
    }

    fn matches(&self, vacancy: &Vacancy) -> bool {
        match self {
            LocationFilter::Any => true,
            LocationFilter::Named(city) => vacancy.location == *city,
            LocationFilter::Remote => is_remote(&vacancy.location),
            LocationFilter::Abroad => !is_domestic(&vacancy.location),
        }
    }
}

pub fn is_remote(location: &str) -> bool {
    let location = location.to_lowercase();
    REMOTE_MARKERS.iter().any(|marker| location.contains(marker))
}

pub fn is_domestic(location: &str) -> bool {
    DOMESTIC_CITIES.contains(&location.trim())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub location: LocationFilter,
    pub search_term: Option<String>,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, location: LocationFilter, search_term: Option<String>) -> Self {
        Self {
            category,
            location,
            search_term,
        }
    }

    /// Критерии из строковых значений UI (`"all"`, `"remote"`, `"abroad"`, ...)
    pub fn from_raw(category: &str, location: &str, search_term: &str) -> Self {
        Self {
            category: CategoryFilter::parse(category),
            location: LocationFilter::parse(location),
            search_term: Some(search_term.to_string()),
        }
    }

    /// Поисковая строка в нижнем регистре; `None` для отсутствующей или пустой.
    /// Пробелы не обрезаются: это делает UI до построения критериев.
    fn needle(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Количество активных ограничений (для бейджа панели фильтров)
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.category != CategoryFilter::Any {
            count += 1;
        }
        if self.location != LocationFilter::Any {
            count += 1;
        }
        if self.needle().is_some() {
            count += 1;
        }
        count
    }

    pub fn matches(&self, vacancy: &Vacancy) -> bool {
        self.matches_with(vacancy, self.needle().as_deref())
    }

    fn matches_with(&self, vacancy: &Vacancy, needle: Option<&str>) -> bool {
        self.category.matches(vacancy)
            && self.location.matches(vacancy)
            && needle.map_or(true, |n| matches_search(vacancy, n))
    }
}

fn matches_search(vacancy: &Vacancy, needle: &str) -> bool {
    [&vacancy.title, &vacancy.company, &vacancy.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Возвращает вакансии, удовлетворяющие всем трем ограничениям, во входном порядке.
pub fn filter_listings(listings: &[Vacancy], criteria: &FilterCriteria) -> Vec<Vacancy> {
    let needle = criteria.needle();
    listings
        .iter()
        .filter(|v| criteria.matches_with(v, needle.as_deref()))
        .cloned()
        .collect()
}

/// Все категории, встречающиеся в каталоге, отсортированные
pub fn distinct_categories(listings: &[Vacancy]) -> Vec<String> {
    listings
        .iter()
        .flat_map(|v| v.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Все конкретные локации, встречающиеся в каталоге, отсортированные
pub fn distinct_locations(listings: &[Vacancy]) -> Vec<String> {
    listings
        .iter()
        .map(|v| v.location.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listings() -> Vec<Vacancy> {
        vec![
            Vacancy::new(1, "Rust Developer", "Acme", "Київ", "сьогодні")
                .with_categories(["it"]),
            Vacancy::new(2, "Дизайнер", "Studio Lviv", "Львів", "вчора")
                .with_categories(["design", "it"]),
            Vacancy::new(3, "Backend Engineer", "Globex", "Berlin", "тиждень тому")
                .with_categories(["it"]),
            Vacancy::new(4, "Копірайтер", "Media", "Віддалено", "сьогодні")
                .with_categories(["marketing"]),
            Vacancy::new(5, "Менеджер", "Acme", "Одеса", "вчора"),
        ]
    }

    fn ids(items: &[Vacancy]) -> Vec<u32> {
        items.iter().map(|v| v.id.0).collect()
    }

    #[test]
    fn test_no_op_criteria_is_identity() {
        let all = listings();
        let criteria = FilterCriteria::from_raw("all", "all", "");
        assert_eq!(filter_listings(&all, &criteria), all);
        assert_eq!(filter_listings(&all, &FilterCriteria::default()), all);
    }

    #[test]
    fn test_category_filter() {
        let criteria = FilterCriteria::from_raw("it", "all", "");
        assert_eq!(ids(&filter_listings(&listings(), &criteria)), vec![1, 2, 3]);

        let criteria = FilterCriteria::from_raw("design", "all", "");
        assert_eq!(ids(&filter_listings(&listings(), &criteria)), vec![2]);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let criteria = FilterCriteria::from_raw("astronomy", "all", "");
        assert!(filter_listings(&listings(), &criteria).is_empty());
    }

    #[test]
    fn test_named_location_exact_match() {
        let criteria = FilterCriteria::from_raw("all", "Київ", "");
        assert_eq!(ids(&filter_listings(&listings(), &criteria)), vec![1]);

        let criteria = FilterCriteria::from_raw("all", "київ", "");
        assert!(filter_listings(&listings(), &criteria).is_empty());
    }

    #[test]
    fn test_remote_location() {
        let mut all = listings();
        all.push(Vacancy::new(6, "Support", "Help", "Remote / EU", "сьогодні"));
        let criteria = FilterCriteria::from_raw("all", "remote", "");
        assert_eq!(ids(&filter_listings(&all, &criteria)), vec![4, 6]);
    }

    #[test]
    fn test_abroad_keeps_only_non_domestic() {
        let pair = vec![
            Vacancy::new(1, "A", "X", "Київ", "сьогодні"),
            Vacancy::new(2, "B", "Y", "Berlin", "сьогодні"),
        ];
        let criteria = FilterCriteria::from_raw("all", "abroad", "");
        assert_eq!(ids(&filter_listings(&pair, &criteria)), vec![2]);

        assert_eq!(ids(&filter_listings(&listings(), &criteria)), vec![3, 4]);
    }

    #[test]
    fn test_abroad_includes_remote_listings() {
        let trio = vec![
            Vacancy::new(1, "A", "X", "Київ", "сьогодні"),
            Vacancy::new(2, "B", "Y", "Berlin", "сьогодні"),
            Vacancy::new(3, "C", "Z", "Віддалено", "сьогодні"),
        ];
        let criteria = FilterCriteria::from_raw("all", "abroad", "");
        assert_eq!(ids(&filter_listings(&trio, &criteria)), vec![2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let by_title = FilterCriteria::from_raw("all", "all", "rust");
        assert_eq!(ids(&filter_listings(&listings(), &by_title)), vec![1]);

        let by_company = FilterCriteria::from_raw("all", "all", "ACME");
        assert_eq!(ids(&filter_listings(&listings(), &by_company)), vec![1, 5]);

        let by_location = FilterCriteria::from_raw("all", "all", "берл");
        assert!(filter_listings(&listings(), &by_location).is_empty());

        let by_location = FilterCriteria::from_raw("all", "all", "ber");
        assert_eq!(ids(&filter_listings(&listings(), &by_location)), vec![3]);

        let cyrillic = FilterCriteria::from_raw("all", "all", "ДИЗАЙН");
        assert_eq!(ids(&filter_listings(&listings(), &cyrillic)), vec![2]);
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let padded = FilterCriteria::from_raw("all", "all", " rust");
        assert!(filter_listings(&listings(), &padded).is_empty());

        let blank = FilterCriteria::from_raw("all", "all", "   ");
        assert!(filter_listings(&listings(), &blank).is_empty());

        let inner_space = FilterCriteria::from_raw("all", "all", "backend engineer");
        assert_eq!(ids(&filter_listings(&listings(), &inner_space)), vec![3]);
    }

    #[test]
    fn test_absent_or_empty_term_keeps_everything() {
        let all = listings();
        let absent = FilterCriteria::new(CategoryFilter::Any, LocationFilter::Any, None);
        let empty = FilterCriteria::new(CategoryFilter::Any, LocationFilter::Any, Some(String::new()));
        assert_eq!(filter_listings(&all, &absent), all);
        assert_eq!(filter_listings(&all, &empty), all);
    }

    #[test]
    fn test_constraints_are_conjunctive() {
        let criteria = FilterCriteria::from_raw("it", "Київ", "developer");
        assert_eq!(ids(&filter_listings(&listings(), &criteria)), vec![1]);

        let criteria = FilterCriteria::from_raw("it", "Львів", "developer");
        assert!(filter_listings(&listings(), &criteria).is_empty());
    }

    #[test]
    fn test_output_is_ordered_subsequence() {
        let all = listings();
        let criteria = FilterCriteria::from_raw("all", "all", "e");
        let result = filter_listings(&all, &criteria);
        let positions: Vec<usize> = result
            .iter()
            .map(|r| all.iter().position(|v| v.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(result.iter().all(|r| criteria.matches(r)));
    }

    #[test]
    fn test_city_literally_named_all_is_not_the_wildcard() {
        let named = FilterCriteria::new(
            CategoryFilter::Any,
            LocationFilter::Named("all".into()),
            None,
        );
        assert!(filter_listings(&listings(), &named).is_empty());
    }

    #[test]
    fn test_parse_sentinels() {
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::Any);
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::Any);
        assert_eq!(LocationFilter::parse("remote"), LocationFilter::Remote);
        assert_eq!(LocationFilter::parse("abroad"), LocationFilter::Abroad);
        assert_eq!(
            LocationFilter::parse("Харків"),
            LocationFilter::Named("Харків".into())
        );
    }

    #[test]
    fn test_active_count() {
        assert_eq!(FilterCriteria::from_raw("all", "all", "").active_count(), 0);
        assert_eq!(FilterCriteria::from_raw("all", "all", "  ").active_count(), 1);
        assert_eq!(FilterCriteria::from_raw("it", "remote", "rust").active_count(), 3);
    }

    #[test]
    fn test_distinct_helpers() {
        assert_eq!(distinct_categories(&listings()), vec!["design", "it", "marketing"]);
        assert_eq!(distinct_locations(&listings()).len(), 5);
    }
}
