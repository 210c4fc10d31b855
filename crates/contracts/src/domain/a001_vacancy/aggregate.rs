use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::common::AggregateId;

/// Максимальное значение шкалы релевантности `progress`
pub const MAX_PROGRESS: u8 = 7;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор вакансии (положительное целое)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VacancyId(pub u32);

impl VacancyId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for VacancyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AggregateId for VacancyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let value = <u32 as AggregateId>::from_string(s)?;
        if value == 0 {
            return Err("Vacancy id must be positive".into());
        }
        Ok(VacancyId(value))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Вакансия в каталоге
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: VacancyId,
    pub title: String,
    pub company: String,
    pub location: String,

    /// `None` означает "не указано"
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,

    #[serde(rename = "postedTime")]
    pub posted_time: String,

    #[serde(default)]
    pub categories: BTreeSet<String>,

    #[serde(rename = "isNew", default)]
    pub is_new: bool,

    /// Оценка релевантности 0..=7, только для отображения
    #[serde(default)]
    pub progress: Option<u8>,
}

impl Vacancy {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        posted_time: impl Into<String>,
    ) -> Self {
        Self {
            id: VacancyId(id),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            salary: None,
            experience: None,
            posted_time: posted_time.into(),
            categories: BTreeSet::new(),
            is_new: false,
            progress: None,
        }
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn with_categories<I, T>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn mark_new(mut self) -> Self {
        self.is_new = true;
        self
    }

    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.contains(tag)
    }

    /// Валидация данных на границе, где они попадают в каталог
    pub fn validate(&self) -> Result<(), String> {
        if self.id.0 == 0 {
            return Err("Ідентифікатор вакансії має бути додатним".into());
        }
        if self.title.trim().is_empty() {
            return Err(format!("Вакансія {}: порожня назва", self.id));
        }
        if self.company.trim().is_empty() {
            return Err(format!("Вакансія {}: порожня компанія", self.id));
        }
        if self.location.trim().is_empty() {
            return Err(format!("Вакансія {}: порожня локація", self.id));
        }
        if let Some(progress) = self.progress {
            if progress > MAX_PROGRESS {
                return Err(format!(
                    "Вакансія {}: progress {} поза межами 0..={}",
                    self.id, progress, MAX_PROGRESS
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_fields() {
        let v = Vacancy::new(1, "  ", "Acme", "Київ", "1 день тому");
        assert!(v.validate().is_err());

        let v = Vacancy::new(2, "Rust dev", "Acme", "", "1 день тому");
        assert!(v.validate().is_err());
    }

    #[test]
    fn test_validate_progress_range() {
        let ok = Vacancy::new(1, "Rust dev", "Acme", "Київ", "сьогодні").with_progress(7);
        assert!(ok.validate().is_ok());

        let bad = Vacancy::new(1, "Rust dev", "Acme", "Київ", "сьогодні").with_progress(8);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_optionals() {
        let json = r#"{
            "id": 5,
            "title": "Дизайнер",
            "company": "Studio",
            "location": "Львів",
            "postedTime": "2 дні тому",
            "categories": ["design"],
            "isNew": true
        }"#;
        let v: Vacancy = serde_json::from_str(json).unwrap();
        assert_eq!(v.id, VacancyId(5));
        assert!(v.is_new);
        assert!(v.salary.is_none());
        assert!(v.has_category("design"));
    }

    #[test]
    fn test_vacancy_id_from_string() {
        assert_eq!(VacancyId::from_string("12"), Ok(VacancyId(12)));
        assert!(VacancyId::from_string("0").is_err());
    }
}
