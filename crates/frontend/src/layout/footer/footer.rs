use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer data-zone="footer" class="footer">
            <span>{format!("© {} {}", year, crate::config::APP_TITLE)}</span>
            <span class="footer__note">"Демонстраційні дані. Дані зберігаються лише у вашому браузері."</span>
        </footer>
    }
}
