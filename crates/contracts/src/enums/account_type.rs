use serde::{Deserialize, Serialize};

/// Тип учетной записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Business,
    Advertiser,
}

impl AccountType {
    /// Код для сохранения в localStorage
    pub fn code(&self) -> &'static str {
        match self {
            AccountType::Business => "business",
            AccountType::Advertiser => "advertiser",
        }
    }

    /// Название для интерфейса
    pub fn display_name(&self) -> &'static str {
        match self {
            AccountType::Business => "Бізнес",
            AccountType::Advertiser => "Рекламодавець",
        }
    }

    pub fn all() -> [AccountType; 2] {
        [AccountType::Business, AccountType::Advertiser]
    }

    /// Разбор сохраненного значения; неизвестная строка дает `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "business" => Some(AccountType::Business),
            "advertiser" => Some(AccountType::Advertiser),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
