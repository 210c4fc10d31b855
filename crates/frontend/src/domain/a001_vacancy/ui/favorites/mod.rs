use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::components::vacancy_card::VacancyCard;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::services::use_services;
use crate::system::favorites::use_favorites;

/// Избранные вакансии в порядке каталога
#[component]
#[allow(non_snake_case)]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_global_context();
    let services = use_services();
    let favorites = use_favorites();

    // id, которых уже нет в каталоге, просто пропускаются
    let vacancies = Memo::new(move |_| services.catalog.select(&favorites.ids()));

    view! {
        <PageFrame page_id="a001_vacancy--favorites" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Обрані вакансії"</h2>
                <span class="page__subtitle">
                    {move || format!("Збережено: {}", vacancies.with(|v| v.len()))}
                </span>
            </div>

            <Show
                when=move || vacancies.with(|v| !v.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <p>"Ви ще не додали жодної вакансії в обране."</p>
                        <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Catalog)>
                            "Переглянути вакансії"
                        </button>
                    </div>
                }
            >
                <div class="vacancy-grid">
                    <For
                        each=move || vacancies.get()
                        key=|vacancy| vacancy.id
                        children=move |vacancy| view! { <VacancyCard vacancy=vacancy /> }
                    />
                </div>
            </Show>
        </PageFrame>
    }
}
