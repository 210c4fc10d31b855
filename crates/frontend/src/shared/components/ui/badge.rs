use leptos::prelude::*;

use crate::shared::data::vacancies::category_label;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Primary,
    Success,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge badge--neutral",
            BadgeTone::Primary => "badge badge--primary",
            BadgeTone::Success => "badge badge--success",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] tone: BadgeTone, children: Children) -> impl IntoView {
    view! { <span class=tone.class()>{children()}</span> }
}

/// Тег категории с человекочитаемым названием
#[component]
pub fn CategoryBadge(#[prop(into)] tag: String) -> impl IntoView {
    view! { <Badge>{category_label(&tag).to_string()}</Badge> }
}

/// Отметка свежей вакансии
#[component]
pub fn NewBadge() -> impl IntoView {
    view! { <Badge tone=BadgeTone::Success>"Нова"</Badge> }
}
