pub mod state;

use self::state::{VacancyListState, FORM_KEY};
use crate::layout::global_context::use_global_context;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Select;
use crate::shared::components::vacancy_card::VacancyCard;
use crate::shared::data::vacancies::category_label;
use crate::shared::list_utils::SearchInput;
use crate::shared::mock_api::fetch_latest_vacancy_page;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::services::use_services;
use contracts::domain::a001_vacancy::Vacancy;
use contracts::shared::catalog_filter::{
    distinct_categories, distinct_locations, is_remote, ALL_SENTINEL,
};
use contracts::shared::pagination::PageResult;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Категории, реально присутствующие в каталоге
fn category_options(listings: &[Vacancy]) -> Vec<(String, String)> {
    std::iter::once((ALL_SENTINEL.to_string(), "Усі категорії".to_string()))
        .chain(distinct_categories(listings).into_iter().map(|tag| {
            let label = category_label(&tag).to_string();
            (tag, label)
        }))
        .collect()
}

/// Конкретные города из каталога; удаленные локации покрывает пункт "Віддалено"
fn location_options(listings: &[Vacancy]) -> Vec<(String, String)> {
    let mut options = vec![(ALL_SENTINEL.to_string(), "Усі міста".to_string())];
    options.extend(
        distinct_locations(listings)
            .into_iter()
            .filter(|location| !is_remote(location))
            .map(|location| (location.clone(), location)),
    );
    options.push(("remote".to_string(), "Віддалено".to_string()));
    options.push(("abroad".to_string(), "За кордоном".to_string()));
    options
}

#[component]
#[allow(non_snake_case)]
pub fn VacancyList() -> impl IntoView {
    let ctx = use_global_context();
    let services = use_services();

    let state = RwSignal::new(
        ctx.get_form_state::<VacancyListState>(FORM_KEY)
            .unwrap_or_default(),
    );
    let filters_expanded = RwSignal::new(state.get_untracked().filters_expanded);
    let (page_result, set_page_result) = signal::<Option<PageResult<Vacancy>>>(None);
    let (is_loading, set_is_loading) = signal(false);

    let categories = category_options(services.catalog.all());
    let locations = location_options(services.catalog.all());

    // После закрытия страницы ответы, которые еще в пути, не применяются
    let requests = services.catalog_requests.clone();
    on_cleanup(move || requests.invalidate());

    Effect::new(move |_| {
        let mut snapshot = state.get();
        snapshot.filters_expanded = filters_expanded.get();
        ctx.set_form_state(FORM_KEY, &snapshot);
    });

    // Ответ на устаревший запрос отбрасывается в fetch_latest_vacancy_page
    Effect::new(move |_| {
        let current = state.get();
        let catalog = services.catalog.clone();
        let requests = services.catalog_requests.clone();
        set_is_loading.set(true);
        spawn_local(async move {
            if let Some(result) = fetch_latest_vacancy_page(
                requests,
                catalog,
                current.criteria(),
                current.page,
                current.page_size,
            )
            .await
            {
                set_page_result.set(Some(result));
                set_is_loading.set(false);
            }
        });
    });

    let criteria = Signal::derive(move || state.with(VacancyListState::criteria));
    let search_value = Signal::derive(move || state.with(|s| s.search.clone()));
    let highlight = Signal::derive(move || state.with(|s| s.search_term().to_string()));

    let current_page = Signal::derive(move || {
        page_result.with(|r| r.as_ref().map(|p| p.page_number).unwrap_or(1))
    });
    let total_pages =
        Signal::derive(move || page_result.with(|r| r.as_ref().map(|p| p.total_pages).unwrap_or(0)));
    let has_previous =
        Signal::derive(move || page_result.with(|r| r.as_ref().is_some_and(PageResult::has_previous)));
    let has_next =
        Signal::derive(move || page_result.with(|r| r.as_ref().is_some_and(PageResult::has_next)));
    let total_count =
        Signal::derive(move || page_result.with(|r| r.as_ref().map(|p| p.total_count).unwrap_or(0)));
    let page_size = Signal::derive(move || state.with(|s| s.page_size));

    let on_category = Callback::new(move |value: String| {
        state.update(|s| {
            s.category = value;
            s.page = 1;
        })
    });
    let on_location = Callback::new(move |value: String| {
        state.update(|s| {
            s.location = value;
            s.page = 1;
        })
    });
    let on_search = Callback::new(move |value: String| {
        state.update(|s| {
            if s.search != value {
                s.search = value;
                s.page = 1;
            }
        })
    });
    let on_reset = Callback::new(move |_| state.update(|s| s.reset_filters()));
    let on_page_change = Callback::new(move |page: usize| state.update(|s| s.page = page));
    let on_page_size_change = Callback::new(move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 1;
        })
    });

    view! {
        <PageFrame page_id="a001_vacancy--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Вакансії"</h2>
                <span class="page__subtitle">
                    {move || format!("Знайдено: {}", total_count.get())}
                </span>
            </div>

            <FilterPanel
                is_expanded=filters_expanded
                criteria=criteria
                on_reset=on_reset
            >
                <div class="filter-panel__fields">
                    <SearchInput value=search_value on_change=on_search />
                    <Select
                        label="Категорія"
                        value=Signal::derive(move || state.with(|s| s.category.clone()))
                        options=categories.clone()
                        on_change=on_category
                    />
                    <Select
                        label="Місто"
                        value=Signal::derive(move || state.with(|s| s.location.clone()))
                        options=locations.clone()
                        on_change=on_location
                    />
                </div>
            </FilterPanel>

            <div class="page__content">
                <Show when=move || is_loading.get()>
                    <div class="loading-indicator">"Завантаження..."</div>
                </Show>

                {move || {
                    page_result.with(|result| match result {
                        None => view! { <></> }.into_any(),
                        Some(page) if page.items.is_empty() => view! {
                            <div class="empty-state">
                                <p>"За вашим запитом вакансій не знайдено."</p>
                                <button class="button button--secondary" on:click=move |_| on_reset.run(())>
                                    "Скинути фільтри"
                                </button>
                            </div>
                        }.into_any(),
                        Some(page) => {
                            let cards = page
                                .items
                                .iter()
                                .enumerate()
                                .map(|(i, vacancy)| view! {
                                    <VacancyCard
                                        vacancy=vacancy.clone()
                                        highlight=highlight
                                        delay_ms={i as u32 * 40}
                                    />
                                })
                                .collect_view();
                            view! { <div class="vacancy-grid">{cards}</div> }.into_any()
                        }
                    })
                }}

                <PaginationControls
                    current_page=current_page
                    total_pages=total_pages
                    total_count=total_count
                    has_previous=has_previous
                    has_next=has_next
                    page_size=page_size
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vacancy> {
        vec![
            Vacancy::new(1, "Rust", "A", "Київ", "сьогодні").with_categories(["it"]),
            Vacancy::new(2, "SMM", "B", "Віддалено", "вчора").with_categories(["marketing"]),
            Vacancy::new(3, "Go", "C", "Berlin", "вчора").with_categories(["it"]),
        ]
    }

    #[test]
    fn test_category_options_come_from_catalog() {
        let options = category_options(&sample());
        let codes: Vec<&str> = options.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, vec!["all", "it", "marketing"]);
        assert_eq!(options[1].1, "IT та розробка");
    }

    #[test]
    fn test_location_options_skip_remote_entries() {
        let options = location_options(&sample());
        let codes: Vec<&str> = options.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, vec!["all", "Berlin", "Київ", "remote", "abroad"]);
    }
}
