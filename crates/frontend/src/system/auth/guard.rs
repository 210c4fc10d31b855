use leptos::prelude::*;

use super::context::use_auth;
use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;

/// Показывает содержимое только аутентифицированным пользователям
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let ctx = use_global_context();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated
            fallback=move || view! {
                <div class="auth-required">
                    <p>"Ця сторінка доступна лише після входу."</p>
                    <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Login)>
                        "Увійти"
                    </button>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
