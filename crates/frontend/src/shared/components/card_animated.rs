//! Карточка Thaw с анимацией появления (`@keyframes card-appear` в стилях).
//!
//! Задержка `delay_ms` дает каскадный эффект в сетке карточек:
//! ```text
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=40>  // карточка 2
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Задержка анимации в мс
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            {children()}
        </Card>
    }
}
