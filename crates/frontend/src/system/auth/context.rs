use contracts::enums::AccountType;
use contracts::system::auth::{LoginForm, RegisterForm};
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub account_type: Option<AccountType>,
}

impl AuthState {
    /// Состояние, восстановленное из localStorage
    pub fn restore() -> Self {
        Self {
            is_authenticated: storage::is_authenticated(),
            account_type: storage::get_account_type(),
        }
    }
}

/// Провайдер контекста аутентификации
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub async fn do_login(form: LoginForm, set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    api::login(form).await?;
    storage::save_authenticated(None);
    set_auth_state.set(AuthState::restore());
    Ok(())
}

pub async fn do_register(
    form: RegisterForm,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let account_type = api::register(form).await?;
    storage::save_authenticated(Some(account_type));
    set_auth_state.set(AuthState::restore());
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_authenticated();
    set_auth_state.set(AuthState::restore());
}
