use leptos::prelude::*;

/// Выпадающий список фильтра: пары (значение, подпись), выбранное значение из `value`
#[component]
pub fn Select(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    let options = options
        .into_iter()
        .map(|(code, caption)| {
            let selected_code = code.clone();
            view! {
                <option value=code selected=move || value.get() == selected_code>
                    {caption}
                </option>
            }
        })
        .collect_view();

    view! {
        <label class="form__group">
            <span class="form__label">{label}</span>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options}
            </select>
        </label>
    }
}
