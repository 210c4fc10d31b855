use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::components::vacancy_card::VacancyCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::services::use_services;

/// Страница компании с ее открытыми вакансиями
#[component]
#[allow(non_snake_case)]
pub fn CompanyDetails(name: String) -> impl IntoView {
    let ctx = use_global_context();
    let services = use_services();

    let company = services.companies.find_or_stub(&name, &services.catalog);
    let vacancies = company.open_vacancies(&services.catalog);
    let vacancy_count = vacancies.len();

    let description = if company.description.is_empty() {
        "Компанія ще не додала опис.".to_string()
    } else {
        company.description.clone()
    };

    view! {
        <PageFrame page_id="a002_company--details" category=PAGE_CAT_DETAIL>
            <div class="details">
                <button class="button button--ghost" on:click=move |_| ctx.navigate(Page::Catalog)>
                    {icon("chevron-left")}
                    "Назад до вакансій"
                </button>

                <div class="details__header">
                    <h1 class="details__title">
                        {icon("building")}
                        {company.name.clone()}
                    </h1>
                </div>

                <p class="details__description">{description}</p>

                <div class="details__grid">
                    <div class="details__row">
                        <span class="details__label">"Місто"</span>
                        <span class="details__value">{company.city.clone()}</span>
                    </div>
                    {company.employee_count.clone().map(|count| view! {
                        <div class="details__row">
                            <span class="details__label">"Працівників"</span>
                            <span class="details__value">{count}</span>
                        </div>
                    })}
                    {company.website.clone().map(|site| view! {
                        <div class="details__row">
                            <span class="details__label">"Сайт"</span>
                            <a class="details__value" href=site.clone() target="_blank">{site.clone()}</a>
                        </div>
                    })}
                </div>

                <h2>{format!("Відкриті вакансії ({})", vacancy_count)}</h2>
                {if vacancies.is_empty() {
                    view! { <p class="empty-state">"Зараз відкритих вакансій немає."</p> }.into_any()
                } else {
                    view! {
                        <div class="vacancy-grid">
                            {vacancies
                                .into_iter()
                                .map(|vacancy| view! { <VacancyCard vacancy=vacancy /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </PageFrame>
    }
}
