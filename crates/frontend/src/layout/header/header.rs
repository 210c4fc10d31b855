use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::components::ui::{Badge, BadgeTone};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::favorites::use_favorites;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();
    let favorites = use_favorites();

    let nav_class = move |page: Page| {
        move || {
            if ctx.page.get() == page {
                "header__link header__link--active"
            } else {
                "header__link"
            }
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="header__title" on:click=move |_| ctx.navigate(Page::Catalog)>
                    {icon("briefcase")}
                    {crate::config::APP_TITLE}
                </a>
                <nav class="header__nav">
                    <a class=nav_class(Page::Catalog) on:click=move |_| ctx.navigate(Page::Catalog)>
                        "Вакансії"
                    </a>
                    <a class=nav_class(Page::Favorites) on:click=move |_| ctx.navigate(Page::Favorites)>
                        {icon("heart")}
                        "Обране"
                        {move || {
                            let count = favorites.count();
                            (count > 0).then(|| view! { <Badge tone=BadgeTone::Primary>{count}</Badge> })
                        }}
                    </a>
                    <Show when=move || auth_state.get().is_authenticated>
                        <a class=nav_class(Page::Chat) on:click=move |_| ctx.navigate(Page::Chat)>
                            {icon("message")}
                            "Повідомлення"
                        </a>
                    </Show>
                </nav>
            </div>
            <div class="header__actions">
                <Show
                    when=move || auth_state.get().is_authenticated
                    fallback=move || view! {
                        <button class="button button--ghost" on:click=move |_| ctx.navigate(Page::Login)>
                            {icon("user")}
                            "Увійти"
                        </button>
                        <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Register)>
                            "Реєстрація"
                        </button>
                    }
                >
                    <button class="button button--ghost" on:click=move |_| ctx.navigate(Page::Dashboard)>
                        {icon("user")}
                        {move || auth_state.get().account_type.map(|t| t.display_name()).unwrap_or("Кабінет")}
                    </button>
                    <button
                        class="button button--ghost"
                        title="Вийти"
                        on:click=move |_| {
                            do_logout(set_auth_state);
                            ctx.navigate(Page::Catalog);
                        }
                    >
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </header>
    }
}
