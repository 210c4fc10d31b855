//! Каталог вакансий: неизменяемая упорядоченная коллекция на время жизни процесса.

use std::collections::HashSet;
use thiserror::Error;

use super::aggregate::{Vacancy, VacancyId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate vacancy id {0}")]
    DuplicateId(VacancyId),
    #[error("invalid vacancy: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Vacancy>,
}

impl Catalog {
    /// Создает каталог, проверяя каждую запись и уникальность `id`.
    /// Порядок входных записей сохраняется.
    pub fn new(items: Vec<Vacancy>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate().map_err(CatalogError::Invalid)?;
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn all(&self) -> &[Vacancy] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: VacancyId) -> Option<&Vacancy> {
        self.items.iter().find(|v| v.id == id)
    }

    pub fn by_company<'a>(&'a self, company: &'a str) -> impl Iterator<Item = &'a Vacancy> + 'a {
        self.items.iter().filter(move |v| v.company == company)
    }

    /// Вакансии в порядке каталога, чьи id входят в `ids`
    pub fn select<'a, I>(&'a self, ids: I) -> Vec<Vacancy>
    where
        I: IntoIterator<Item = &'a VacancyId>,
    {
        let wanted: HashSet<VacancyId> = ids.into_iter().copied().collect();
        self.items
            .iter()
            .filter(|v| wanted.contains(&v.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vacancy> {
        vec![
            Vacancy::new(1, "Rust dev", "Acme", "Київ", "сьогодні"),
            Vacancy::new(2, "QA", "Beta", "Львів", "вчора"),
            Vacancy::new(3, "PM", "Acme", "Berlin", "тиждень тому"),
        ]
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut items = sample();
        items.push(Vacancy::new(2, "Другий QA", "Gamma", "Одеса", "сьогодні"));
        assert_eq!(
            Catalog::new(items).unwrap_err(),
            CatalogError::DuplicateId(VacancyId(2))
        );
    }

    #[test]
    fn test_rejects_invalid_record() {
        let items = vec![Vacancy::new(1, "", "Acme", "Київ", "сьогодні")];
        assert!(matches!(Catalog::new(items), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn test_lookup_helpers() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find(VacancyId(2)).map(|v| v.title.as_str()), Some("QA"));
        assert!(catalog.find(VacancyId(9)).is_none());

        let acme: Vec<u32> = catalog.by_company("Acme").map(|v| v.id.0).collect();
        assert_eq!(acme, vec![1, 3]);
    }

    #[test]
    fn test_select_keeps_catalog_order() {
        let catalog = Catalog::new(sample()).unwrap();
        let ids = [VacancyId(3), VacancyId(1), VacancyId(42)];
        let picked: Vec<u32> = catalog.select(ids.iter()).iter().map(|v| v.id.0).collect();
        assert_eq!(picked, vec![1, 3]);
    }
}
