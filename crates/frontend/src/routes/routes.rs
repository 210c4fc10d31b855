use crate::domain::a001_vacancy::ui::details::VacancyDetails;
use crate::domain::a001_vacancy::ui::favorites::FavoritesPage;
use crate::domain::a001_vacancy::ui::list::VacancyList;
use crate::domain::a002_company::ui::details::CompanyDetails;
use crate::domain::a003_chat::ui::ChatPage;
use crate::layout::global_context::use_global_context;
use crate::layout::Shell;
use crate::routes::page::Page;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::{LoginPage, RegisterPage};
use leptos::prelude::*;

fn render_page(page: Page) -> AnyView {
    if page.requires_auth() {
        return view! { <RequireAuth>{render_public(page.clone())}</RequireAuth> }.into_any();
    }
    render_public(page)
}

fn render_public(page: Page) -> AnyView {
    match page {
        Page::Catalog => view! { <VacancyList /> }.into_any(),
        Page::Vacancy(id) => view! { <VacancyDetails id=id /> }.into_any(),
        Page::Company(name) => view! { <CompanyDetails name=name /> }.into_any(),
        Page::Favorites => view! { <FavoritesPage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Register => view! { <RegisterPage /> }.into_any(),
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Chat => view! { <ChatPage /> }.into_any(),
    }
}

/// Переключатель страниц без leptos_router: текущая страница берется из `AppGlobalContext`
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <Shell>
            {move || render_page(ctx.page.get())}
        </Shell>
    }
}
