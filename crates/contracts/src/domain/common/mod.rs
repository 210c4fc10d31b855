//! Общие типы и трейты для агрегатов

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
