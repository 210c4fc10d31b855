//! Поиск в списках: разбиение текста на совпадения для подсветки и поле поиска с debounce.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::SEARCH_DEBOUNCE_MS;
use crate::shared::icons::icon;

fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Делит `text` на сегменты `(фрагмент, это_совпадение)` по вхождениям `filter`
/// без учета регистра. Пустой фильтр дает один сегмент без совпадения.
///
/// Сравнение посимвольное, поэтому границы сегментов всегда совпадают с границами
/// символов исходного текста, даже когда нижний регистр меняет длину.
pub fn match_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    let needle: Vec<char> = filter.chars().collect();
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    if needle.is_empty() || needle.len() > chars.len() {
        return vec![(text.to_string(), false)];
    }

    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |(pos, _)| *pos);

    let mut segments = Vec::new();
    let mut plain_from = 0;
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let hit = chars[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|((_, c), n)| same_ignoring_case(*c, *n));
        if !hit {
            i += 1;
            continue;
        }
        let (start, end) = (byte_at(i), byte_at(i + needle.len()));
        if start > plain_from {
            segments.push((text[plain_from..start].to_string(), false));
        }
        segments.push((text[start..end].to_string(), true));
        plain_from = end;
        i += needle.len();
    }
    if plain_from < text.len() || segments.is_empty() {
        segments.push((text[plain_from..].to_string(), false));
    }
    segments
}

pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    match_segments(text, filter)
        .into_iter()
        .map(|(fragment, is_match)| {
            if is_match {
                view! { <mark class="search-match">{fragment}</mark> }.into_any()
            } else {
                view! { <span>{fragment}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Поле поиска: `on_change` вызывается после паузы во вводе
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder =
        placeholder.unwrap_or_else(|| "Посада, компанія або місто...".to_string());
    let draft = RwSignal::new(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let schedule = move |text: String| {
        draft.set(text.clone());
        // Новый таймер заменяет предыдущий; drop отменяет старый
        let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(text));
        pending.set_value(Some(timer));
    };

    let clear = move |_| {
        pending.set_value(None);
        draft.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="search"
                class=move || {
                    if value.with(|v| v.trim().is_empty()) {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || draft.get()
                on:input=move |ev| schedule(event_target_value(&ev))
            />
            <Show when=move || draft.with(|d| !d.is_empty())>
                <button class="search-input__clear" title="Очистити" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(segments: &[(String, bool)]) -> Vec<&str> {
        segments
            .iter()
            .filter(|(_, m)| *m)
            .map(|(s, _)| s.as_str())
            .collect()
    }

    #[test]
    fn test_empty_filter_is_one_plain_segment() {
        assert_eq!(match_segments("Rust dev", ""), vec![("Rust dev".to_string(), false)]);
    }

    #[test]
    fn test_lowercase_length_change_keeps_char_boundaries() {
        // 'İ' (2 байта) в нижнем регистре дает "i̇" (3 байта)
        let segments = match_segments("İstanbul office", "stan");
        assert_eq!(marked(&segments), vec!["stan"]);
        let joined: String = segments.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, "İstanbul office");

        let segments = match_segments("ẞ Straße", "straße");
        assert_eq!(marked(&segments), vec!["Straße"]);
    }

    #[test]
    fn test_matches_keep_original_case() {
        let segments = match_segments("Rust and rust", "RUST");
        assert_eq!(marked(&segments), vec!["Rust", "rust"]);
        let joined: String = segments.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, "Rust and rust");
    }

    #[test]
    fn test_cyrillic() {
        let segments = match_segments("Менеджер з продажу", "продаж");
        assert_eq!(marked(&segments), vec!["продаж"]);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_segments("Київ", "Львів"), vec![("Київ".to_string(), false)]);
    }
}
