use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку (для query-string и ключей хранилища)
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for u32 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u32>()
            .map_err(|e| format!("Invalid u32: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_round_trip_through_query_string() {
        assert_eq!(<u32 as AggregateId>::from_string(" 42 "), Ok(42));
        assert_eq!(42u32.as_string(), "42");
    }

    #[test]
    fn test_invalid_u32() {
        assert!(<u32 as AggregateId>::from_string("-1").is_err());
        assert!(<u32 as AggregateId>::from_string("abc").is_err());
    }
}
