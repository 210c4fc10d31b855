//! Имитация API аутентификации: проверяется только заполненность формы.

use contracts::enums::AccountType;
use contracts::system::auth::{LoginForm, RegisterForm};

use crate::shared::mock_api::simulate_latency;

/// Вход. Тип учетной записи не возвращается: берется сохраненный ранее.
pub async fn login(form: LoginForm) -> Result<(), String> {
    form.validate().map_err(str::to_string)?;
    simulate_latency().await;
    log::info!("mock login for {}", form.email.trim());
    Ok(())
}

/// Регистрация: возвращает выбранный тип учетной записи
pub async fn register(form: RegisterForm) -> Result<AccountType, String> {
    form.validate().map_err(str::to_string)?;
    simulate_latency().await;
    log::info!("mock registration for {} as {}", form.email.trim(), form.account_type);
    Ok(form.account_type)
}
