//! PageFrame — корневой контейнер каждой страницы.
//!
//! `id` страницы имеет формат `{entity}--{category}`, например
//! `"a001_vacancy--list"`, чтобы из DOM-инспектора можно было найти модуль.

use leptos::prelude::*;

/// Список записей с фильтрами/пагинацией
pub const PAGE_CAT_LIST: &str = "list";

/// Карточка одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Кабинет пользователя
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Вход, регистрация, чат
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
