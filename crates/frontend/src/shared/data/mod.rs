//! Встроенные демонстрационные данные вместо бэкенда.

pub mod companies;
pub mod conversations;
pub mod vacancies;
