use serde::{Deserialize, Serialize};

use crate::domain::a001_vacancy::{Catalog, Vacancy};

/// Компания-работодатель для страницы деталей компании
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Название совпадает с полем `company` в вакансиях
    pub name: String,
    pub description: String,
    pub city: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "employeeCount", default)]
    pub employee_count: Option<String>,
}

impl Company {
    pub fn new(name: impl Into<String>, city: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            city: city.into(),
            website: None,
            employee_count: None,
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_employee_count(mut self, count: impl Into<String>) -> Self {
        self.employee_count = Some(count.into());
        self
    }

    /// Вакансии этой компании в порядке каталога
    pub fn open_vacancies(&self, catalog: &Catalog) -> Vec<Vacancy> {
        catalog.by_company(&self.name).cloned().collect()
    }
}

/// Справочник компаний
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
}

impl CompanyDirectory {
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    pub fn all(&self) -> &[Company] {
        &self.companies
    }

    pub fn find(&self, name: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.name == name)
    }

    /// Компания по названию или минимальная карточка, если в справочнике ее нет
    pub fn find_or_stub(&self, name: &str, catalog: &Catalog) -> Company {
        if let Some(company) = self.find(name) {
            return company.clone();
        }
        let city = catalog
            .by_company(name)
            .next()
            .map(|v| v.location.clone())
            .unwrap_or_default();
        Company::new(name, city, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Vacancy::new(1, "Rust dev", "Acme", "Київ", "сьогодні"),
            Vacancy::new(2, "QA", "Beta", "Львів", "вчора"),
            Vacancy::new(3, "PM", "Acme", "Київ", "вчора"),
        ])
        .unwrap()
    }

    #[test]
    fn test_open_vacancies() {
        let acme = Company::new("Acme", "Київ", "Продуктова компанія");
        let ids: Vec<u32> = acme.open_vacancies(&catalog()).iter().map(|v| v.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_find_or_stub_uses_vacancy_location() {
        let directory = CompanyDirectory::new(vec![Company::new("Acme", "Київ", "")]);
        assert_eq!(directory.find_or_stub("Acme", &catalog()).city, "Київ");

        let stub = directory.find_or_stub("Beta", &catalog());
        assert_eq!(stub.name, "Beta");
        assert_eq!(stub.city, "Львів");
        assert!(stub.description.is_empty());
    }
}
