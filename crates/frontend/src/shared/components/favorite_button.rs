use contracts::domain::a001_vacancy::VacancyId;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::favorites::use_favorites;

/// Кнопка-сердечко "в избранное"
#[component]
pub fn FavoriteButton(id: VacancyId) -> impl IntoView {
    let favorites = use_favorites();
    let is_favorite = move || favorites.is_favorite(id);

    view! {
        <button
            class=move || if is_favorite() { "favorite-btn favorite-btn--active" } else { "favorite-btn" }
            title=move || if is_favorite() { "Прибрати з обраного" } else { "Додати в обране" }
            on:click=move |ev| {
                ev.stop_propagation();
                favorites.toggle(id);
            }
        >
            {move || if is_favorite() { icon("heart-filled") } else { icon("heart") }}
        </button>
    }
}
