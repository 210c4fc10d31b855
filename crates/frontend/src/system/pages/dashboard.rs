//! Кабинет пользователя с разным содержимым для бизнеса и рекламодателя.

use contracts::enums::AccountType;
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::vacancy_card::VacancyCard;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::services::use_services;
use crate::system::auth::context::use_auth;
use crate::system::favorites::use_favorites;

/// Компания, от имени которой демонстрируется бизнес-кабинет
const DEMO_BUSINESS_COMPANY: &str = "TechNova";

/// Рекламные пакеты для кабинета рекламодателя
const AD_PACKAGES: &[(&str, &str, &str)] = &[
    ("Старт", "Банер у каталозі на 7 днів", "1 500 грн"),
    ("Бізнес", "Банер + виділення у пошуку на 14 днів", "3 900 грн"),
    ("Преміум", "Головна сторінка та розсилка на 30 днів", "9 900 грн"),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <PageFrame page_id="account--dashboard" category=PAGE_CAT_DASHBOARD>
            {move || match auth_state.get().account_type {
                Some(AccountType::Business) => view! { <BusinessDashboard /> }.into_any(),
                Some(AccountType::Advertiser) => view! { <AdvertiserDashboard /> }.into_any(),
                // Тип может отсутствовать: вход без предварительной регистрации
                None => view! { <UnknownAccountDashboard /> }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn BusinessDashboard() -> impl IntoView {
    let services = use_services();
    let vacancies: Vec<_> = services.catalog.by_company(DEMO_BUSINESS_COMPANY).cloned().collect();
    let total = vacancies.len();
    let new_count = vacancies.iter().filter(|v| v.is_new).count();

    view! {
        <div class="page__header">
            <h2>"Кабінет компанії"</h2>
        </div>
        <div class="dashboard-stats">
            <CardAnimated delay_ms=0>
                <div class="stat-card__value">{total}</div>
                <div class="stat-card__label">"Активних вакансій"</div>
            </CardAnimated>
            <CardAnimated delay_ms=80>
                <div class="stat-card__value">{new_count}</div>
                <div class="stat-card__label">"Нових за тиждень"</div>
            </CardAnimated>
        </div>
        <h3>"Ваші вакансії"</h3>
        <div class="vacancy-grid">
            {vacancies.into_iter().map(|v| view! { <VacancyCard vacancy=v /> }).collect_view()}
        </div>
    }
}

#[component]
fn AdvertiserDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let favorites = use_favorites();

    view! {
        <div class="page__header">
            <h2>"Кабінет рекламодавця"</h2>
        </div>
        <div class="dashboard-stats">
            <CardAnimated delay_ms=0>
                <div class="stat-card__value">{move || favorites.count()}</div>
                <div class="stat-card__label">"Вакансій в обраному"</div>
                <a on:click=move |_| ctx.navigate(Page::Favorites)>"Переглянути"</a>
            </CardAnimated>
        </div>
        <h3>"Рекламні пакети"</h3>
        <div class="ad-packages">
            {AD_PACKAGES.iter().enumerate().map(|(i, (name, description, price))| view! {
                <CardAnimated delay_ms={i as u32 * 80}>
                    <h4>{*name}</h4>
                    <p>{*description}</p>
                    <div class="ad-packages__price">{*price}</div>
                </CardAnimated>
            }).collect_view()}
        </div>
    }
}

#[component]
fn UnknownAccountDashboard() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="page__header">
            <h2>"Кабінет"</h2>
        </div>
        <p>"Тип облікового запису не визначено. Зареєструйтеся як бізнес або рекламодавець."</p>
        <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Register)>
            "Обрати тип"
        </button>
    }
}
