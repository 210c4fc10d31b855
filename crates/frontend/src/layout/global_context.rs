use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::routes::page::Page;

/// Глобальное состояние навигации. Текущая страница зеркалируется в query-string.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    /// Сохраненное состояние форм/списков между переходами (фильтры каталога и т.п.)
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::from_query_string(&current_search())),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn get_form_state<T: serde::de::DeserializeOwned>(&self, form_key: &str) -> Option<T> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn set_form_state<T: serde::Serialize>(&self, form_key: &str, state: &T) {
        match serde_json::to_value(state) {
            Ok(value) => self.form_states.update(|states| {
                states.insert(form_key.to_string(), value);
            }),
            Err(e) => log::warn!("form state {} not saved: {}", form_key, e),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {:?}", page);
        self.page.set(page);
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn init_router_integration(&self) {
        let this = *self;
        Effect::new(move |_| {
            let query_string = this.page.get().to_query_string();
            let new_search = if query_string.is_empty() {
                String::new()
            } else {
                format!("?{}", query_string)
            };

            // Обновляем URL только если он действительно изменился
            if current_search() != new_search {
                let Some(w) = window() else { return };
                let pathname = w.location().pathname().unwrap_or_else(|_| "/".to_string());
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&format!("{}{}", pathname, new_search)),
                    );
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
