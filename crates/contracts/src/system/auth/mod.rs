use serde::{Deserialize, Serialize};

use crate::enums::AccountType;

/// Форма входа. Учетные данные нигде не проверяются, только заполненность полей.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err("Введіть пароль");
        }
        Ok(())
    }
}

/// Форма регистрации с выбором типа учетной записи
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "accountType")]
    pub account_type: AccountType,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            account_type: AccountType::Business,
        }
    }
}

pub const MIN_PASSWORD_LEN: usize = 6;

impl RegisterForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Введіть ім'я або назву компанії");
        }
        validate_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Пароль має містити щонайменше 6 символів");
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Введіть email");
    }
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err("Некоректний email"),
    }
}
