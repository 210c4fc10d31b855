use contracts::shared::catalog_filter::{CategoryFilter, FilterCriteria, LocationFilter};
use leptos::prelude::*;

use crate::shared::data::vacancies::category_label;
use crate::shared::icons::icon;

/// Краткие подписи активных фильтров для свернутой панели
fn summary_chips(criteria: &FilterCriteria) -> Vec<String> {
    let mut chips = Vec::new();
    if let CategoryFilter::Tag(tag) = &criteria.category {
        chips.push(category_label(tag).to_string());
    }
    match &criteria.location {
        LocationFilter::Any => {}
        LocationFilter::Named(city) => chips.push(city.clone()),
        LocationFilter::Remote => chips.push("Віддалено".to_string()),
        LocationFilter::Abroad => chips.push("За кордоном".to_string()),
    }
    if let Some(term) = criteria.search_term.as_deref().map(str::trim) {
        if !term.is_empty() {
            chips.push(format!("«{}»", term));
        }
    }
    chips
}

/// Сворачиваемая панель фильтров каталога.
/// В свернутом состоянии показывает активные фильтры как "чипы".
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    #[prop(into)] criteria: Signal<FilterCriteria>,
    on_reset: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let active_count = move || criteria.with(FilterCriteria::active_count);

    let chevron_class = move || {
        if is_expanded.get() {
            "filter-panel__chevron filter-panel__chevron--expanded"
        } else {
            "filter-panel__chevron"
        }
    };

    view! {
        <section class="filter-panel">
            <header class="filter-panel-header">
                <button
                    class="filter-panel-header__toggle"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=chevron_class>{icon("chevron-right")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Фільтри"</span>
                    {move || {
                        let count = active_count();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </button>
                <Show when=move || !is_expanded.get()>
                    <div class="filter-panel__chips">
                        {move || criteria.with(summary_chips)
                            .into_iter()
                            .map(|chip| view! { <span class="filter-panel__chip">{chip}</span> })
                            .collect_view()}
                    </div>
                </Show>
                <Show when=move || { active_count() > 0 }>
                    <button class="button button--ghost" on:click=move |_| on_reset.run(())>
                        {icon("x")}
                        "Скинути"
                    </button>
                </Show>
            </header>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">{children()}</div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_chips() {
        assert!(summary_chips(&FilterCriteria::default()).is_empty());

        let criteria = FilterCriteria::from_raw("it", "remote", "  rust ");
        assert_eq!(
            summary_chips(&criteria),
            vec!["IT та розробка".to_string(), "Віддалено".to_string(), "«rust»".to_string()]
        );

        let criteria = FilterCriteria::from_raw("all", "Львів", "");
        assert_eq!(summary_chips(&criteria), vec!["Львів".to_string()]);
    }
}
