pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

use footer::footer::Footer;
use global_context::use_global_context;
use header::Header;

/// Каркас страницы:
/// ```text
/// +---------------------------+
/// |          Header           |
/// +---------------------------+
/// |          Content          |
/// +---------------------------+
/// |          Footer           |
/// +---------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    // Синхронизация адресной строки с текущей страницей
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
