use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопки навигации по страницам. Номера страниц считаются с 1.
/// Если страниц нет, компонент ничего не показывает.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts =
        page_size_options.unwrap_or_else(|| crate::config::PAGE_SIZE_OPTIONS.to_vec());
    let default_size = page_size_opts.first().copied().unwrap_or(crate::config::PAGE_SIZE);
    let is_first = move || !has_previous.get();
    let is_last = move || !has_next.get();

    view! {
        <Show when=move || { total_pages.get() > 0 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(1)
                    disabled=is_first
                    title="Перша сторінка"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if has_previous.get() {
                            on_page_change.run(current_page.get() - 1);
                        }
                    }
                    disabled=is_first
                    title="Попередня сторінка"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || {
                        format!("{} / {} ({})", current_page.get(), total_pages.get(), total_count.get())
                    }}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if has_next.get() {
                            on_page_change.run(current_page.get() + 1);
                        }
                    }
                    disabled=is_last
                    title="Наступна сторінка"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(total_pages.get())
                    disabled=is_last
                    title="Остання сторінка"
                >
                    {icon("chevrons-right")}
                </button>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(default_size);
                        on_page_size_change.run(val);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </Show>
    }
}
