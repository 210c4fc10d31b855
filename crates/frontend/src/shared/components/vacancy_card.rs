use contracts::domain::a001_vacancy::{Vacancy, MAX_PROGRESS};
use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::routes::page::Page;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::favorite_button::FavoriteButton;
use crate::shared::components::ui::{CategoryBadge, NewBadge};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;

/// Карточка вакансии в сетке каталога
#[component]
pub fn VacancyCard(
    vacancy: Vacancy,
    /// Поисковая строка для подсветки
    #[prop(optional, into)]
    highlight: Signal<String>,
    /// Задержка появления карточки, мс
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let ctx = use_global_context();
    let id = vacancy.id;
    let company = vacancy.company.clone();
    let title = vacancy.title.clone();
    let location = vacancy.location.clone();
    let company_label = vacancy.company.clone();
    let progress = vacancy.progress.unwrap_or(0).min(MAX_PROGRESS);
    let progress_style = format!(
        "width: {}%;",
        u32::from(progress) * 100 / u32::from(MAX_PROGRESS)
    );
    let salary = vacancy
        .salary
        .clone()
        .unwrap_or_else(|| "Зарплата не вказана".to_string());

    view! {
        <div class="vacancy-card">
            <CardAnimated delay_ms=delay_ms>
                <div class="vacancy-card__header">
                    <a class="vacancy-card__title" on:click=move |_| ctx.navigate(Page::Vacancy(id))>
                        {move || highlight_matches(&title, &highlight.get())}
                    </a>
                    <FavoriteButton id=id />
                </div>
                <a class="vacancy-card__company" on:click=move |_| ctx.navigate(Page::Company(company.clone()))>
                    {icon("building")}
                    {move || highlight_matches(&company_label, &highlight.get())}
                </a>
                <div class="vacancy-card__location">
                    {icon("map-pin")}
                    {move || highlight_matches(&location, &highlight.get())}
                </div>
                <div class="vacancy-card__salary">{salary}</div>
                <div class="vacancy-card__tags">
                    {vacancy.is_new.then(|| view! { <NewBadge /> })}
                    {vacancy.categories.iter().map(|tag| view! { <CategoryBadge tag=tag.clone() /> }).collect_view()}
                </div>
                <div class="vacancy-card__footer">
                    <span class="vacancy-card__posted">{vacancy.posted_time.clone()}</span>
                    <div class="vacancy-card__progress" title="Релевантність">
                        <div class="vacancy-card__progress-bar" style=progress_style></div>
                    </div>
                </div>
            </CardAnimated>
        </div>
    }
}
