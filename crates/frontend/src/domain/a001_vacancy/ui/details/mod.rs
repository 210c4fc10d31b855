use contracts::domain::a001_vacancy::{Vacancy, VacancyId};
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::components::favorite_button::FavoriteButton;
use crate::shared::components::ui::{CategoryBadge, NewBadge};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::services::use_services;

fn field_row(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="details__row">
            <span class="details__label">{label}</span>
            <span class="details__value">
                {value.unwrap_or_else(|| "Не вказано".to_string())}
            </span>
        </div>
    }
}

#[component]
fn VacancyNotFound(id: VacancyId) -> impl IntoView {
    let ctx = use_global_context();
    view! {
        <div class="empty-state">
            <h2>"Вакансію не знайдено"</h2>
            <p>{format!("Вакансії #{} немає в каталозі.", id)}</p>
            <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Catalog)>
                "До каталогу"
            </button>
        </div>
    }
}

/// Страница вакансии
#[component]
#[allow(non_snake_case)]
pub fn VacancyDetails(id: VacancyId) -> impl IntoView {
    let services = use_services();

    let content = match services.catalog.find(id).cloned() {
        Some(vacancy) => view! { <VacancyDetailsBody vacancy=vacancy /> }.into_any(),
        None => {
            log::warn!("vacancy {} not found", id);
            view! { <VacancyNotFound id=id /> }.into_any()
        }
    };

    view! {
        <PageFrame page_id="a001_vacancy--details" category=PAGE_CAT_DETAIL>
            {content}
        </PageFrame>
    }
}

#[component]
fn VacancyDetailsBody(vacancy: Vacancy) -> impl IntoView {
    let ctx = use_global_context();
    let company = vacancy.company.clone();
    let company_for_link = vacancy.company.clone();
    let categories = vacancy
        .categories
        .iter()
        .map(|tag| view! { <CategoryBadge tag=tag.clone() /> })
        .collect_view();

    view! {
        <div class="details">
            <button class="button button--ghost" on:click=move |_| ctx.navigate(Page::Catalog)>
                {icon("chevron-left")}
                "Назад до вакансій"
            </button>

            <div class="details__header">
                <div>
                    <h1 class="details__title">{vacancy.title.clone()}</h1>
                    <a
                        class="details__company"
                        on:click=move |_| ctx.navigate(Page::Company(company_for_link.clone()))
                    >
                        {icon("building")}
                        {company}
                    </a>
                </div>
                <FavoriteButton id=vacancy.id />
            </div>

            <div class="details__badges">
                {vacancy.is_new.then(|| view! { <NewBadge /> })}
                {categories}
            </div>

            <div class="details__grid">
                {field_row("Місто", Some(vacancy.location.clone()))}
                {field_row("Зарплата", vacancy.salary.clone())}
                {field_row("Досвід", vacancy.experience.clone())}
                {field_row("Опубліковано", Some(vacancy.posted_time.clone()))}
            </div>

            <div class="details__actions">
                <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Chat)>
                    {icon("message")}
                    "Написати роботодавцю"
                </button>
            </div>
        </div>
    }
}
