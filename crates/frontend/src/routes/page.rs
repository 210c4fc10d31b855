//! Страницы приложения и их отображение в query-string (`?page=vacancy&id=3`).

use contracts::domain::a001_vacancy::VacancyId;
use contracts::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Catalog,
    Vacancy(VacancyId),
    Company(String),
    Favorites,
    Login,
    Register,
    Dashboard,
    Chat,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Page {
    fn code(&self) -> &'static str {
        match self {
            Page::Catalog => "catalog",
            Page::Vacancy(_) => "vacancy",
            Page::Company(_) => "company",
            Page::Favorites => "favorites",
            Page::Login => "login",
            Page::Register => "register",
            Page::Dashboard => "dashboard",
            Page::Chat => "chat",
        }
    }

    pub fn to_query(&self) -> PageQuery {
        match self {
            Page::Catalog => PageQuery::default(),
            Page::Vacancy(id) => PageQuery {
                page: Some(self.code().to_string()),
                id: Some(id.as_string()),
                name: None,
            },
            Page::Company(name) => PageQuery {
                page: Some(self.code().to_string()),
                id: None,
                name: Some(name.clone()),
            },
            _ => PageQuery {
                page: Some(self.code().to_string()),
                ..PageQuery::default()
            },
        }
    }

    /// Неизвестный или неполный адрес ведет в каталог
    pub fn from_query(query: &PageQuery) -> Page {
        match query.page.as_deref() {
            Some("vacancy") => query
                .id
                .as_deref()
                .and_then(|id| VacancyId::from_string(id).ok())
                .map(Page::Vacancy)
                .unwrap_or_default(),
            Some("company") => match query.name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => Page::Company(name.to_string()),
                _ => Page::Catalog,
            },
            Some("favorites") => Page::Favorites,
            Some("login") => Page::Login,
            Some("register") => Page::Register,
            Some("dashboard") => Page::Dashboard,
            Some("chat") => Page::Chat,
            _ => Page::Catalog,
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(&self.to_query()).unwrap_or_default()
    }

    pub fn from_query_string(search: &str) -> Page {
        serde_qs::from_str::<PageQuery>(search.trim_start_matches('?'))
            .map(|q| Page::from_query(&q))
            .unwrap_or_default()
    }

    /// Страницы, доступные только после входа
    pub fn requires_auth(&self) -> bool {
        matches!(self, Page::Dashboard | Page::Chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_round_trip() {
        let pages = [
            Page::Catalog,
            Page::Vacancy(VacancyId(3)),
            Page::Company("Pixel Studio".into()),
            Page::Company("Київ Трейд".into()),
            Page::Favorites,
            Page::Dashboard,
            Page::Chat,
        ];
        for page in pages {
            let qs = page.to_query_string();
            assert_eq!(Page::from_query_string(&format!("?{qs}")), page, "{qs}");
        }
    }

    #[test]
    fn test_catalog_has_empty_query() {
        assert_eq!(Page::Catalog.to_query_string(), "");
        assert_eq!(Page::from_query_string(""), Page::Catalog);
    }

    #[test]
    fn test_malformed_queries_fall_back_to_catalog() {
        assert_eq!(Page::from_query_string("?page=vacancy"), Page::Catalog);
        assert_eq!(Page::from_query_string("?page=vacancy&id=0"), Page::Catalog);
        assert_eq!(Page::from_query_string("?page=vacancy&id=abc"), Page::Catalog);
        assert_eq!(Page::from_query_string("?page=company&name="), Page::Catalog);
        assert_eq!(Page::from_query_string("?page=unknown"), Page::Catalog);
    }

    #[test]
    fn test_requires_auth() {
        assert!(Page::Dashboard.requires_auth());
        assert!(!Page::Favorites.requires_auth());
    }
}
