pub mod aggregate;
pub mod catalog;

pub use aggregate::{Vacancy, VacancyId, MAX_PROGRESS};
pub use catalog::{Catalog, CatalogError};
