use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::services::AppServices;
use crate::system::auth::context::AuthProvider;
use crate::system::favorites::FavoritesContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let services = AppServices::load();

    // Маршрут, синхронизированный с ?page=... в адресной строке
    provide_context(AppGlobalContext::new());
    provide_context(FavoritesContext::new(services.favorites.clone()));
    provide_context(services);

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </ConfigProvider>
    }
}
