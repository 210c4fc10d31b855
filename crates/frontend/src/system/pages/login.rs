use contracts::enums::AccountType;
use contracts::system::auth::{LoginForm, RegisterForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Input, InputType};

use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::context::{do_login, do_register, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_global_context();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |_| {
        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_login(form, set_auth_state).await {
                Ok(()) => ctx.navigate(Page::Dashboard),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="auth--login" category=PAGE_CAT_SYSTEM>
            <div class="login-box">
                <h2>"Вхід"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="form-group">
                    <label>"Email"</label>
                    <Input value=email placeholder="you@example.com" />
                </div>
                <div class="form-group">
                    <label>"Пароль"</label>
                    <Input value=password input_type=InputType::Password />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_loading
                    on_click=on_submit
                >
                    {move || if is_loading.get() { "Вхід..." } else { "Увійти" }}
                </Button>

                <p class="login-info">
                    "Немає облікового запису? "
                    <a on:click=move |_| ctx.navigate(Page::Register)>"Зареєструватися"</a>
                </p>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_global_context();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let account_type = RwSignal::new(AccountType::Business);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |_| {
        let form = RegisterForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            account_type: account_type.get(),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_register(form, set_auth_state).await {
                Ok(()) => ctx.navigate(Page::Dashboard),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="auth--register" category=PAGE_CAT_SYSTEM>
            <div class="login-box">
                <h2>"Реєстрація"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="account-type-switch">
                    {AccountType::all().into_iter().map(|t| view! {
                        <button
                            class=move || if account_type.get() == t {
                                "account-type-switch__option account-type-switch__option--active"
                            } else {
                                "account-type-switch__option"
                            }
                            on:click=move |_| account_type.set(t)
                        >
                            {t.display_name()}
                        </button>
                    }).collect_view()}
                </div>

                <div class="form-group">
                    <label>
                        {move || match account_type.get() {
                            AccountType::Business => "Назва компанії",
                            AccountType::Advertiser => "Ім'я",
                        }}
                    </label>
                    <Input value=name />
                </div>
                <div class="form-group">
                    <label>"Email"</label>
                    <Input value=email placeholder="you@example.com" />
                </div>
                <div class="form-group">
                    <label>"Пароль"</label>
                    <Input value=password input_type=InputType::Password />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=is_loading
                    on_click=on_submit
                >
                    {move || if is_loading.get() { "Реєстрація..." } else { "Створити обліковий запис" }}
                </Button>

                <p class="login-info">
                    "Вже зареєстровані? "
                    <a on:click=move |_| ctx.navigate(Page::Login)>"Увійти"</a>
                </p>
            </div>
        </PageFrame>
    }
}
