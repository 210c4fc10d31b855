use contracts::domain::a001_vacancy::Catalog;
use contracts::domain::a002_company::CompanyDirectory;
use contracts::shared::request_generation::RequestGeneration;
use contracts::system::favorites::FavoritesLedger;
use std::sync::Arc;

use super::data;
use super::storage::LocalStorage;

/// Данные и сервисы, общие для всего приложения (передаются через context)
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<Catalog>,
    pub companies: Arc<CompanyDirectory>,
    pub favorites: Arc<FavoritesLedger<LocalStorage>>,
    /// Поколения запросов страницы каталога
    pub catalog_requests: Arc<RequestGeneration>,
}

impl AppServices {
    pub fn load() -> Self {
        let catalog = match Catalog::new(data::vacancies::seed()) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("catalog seed rejected: {}", e);
                Catalog::default()
            }
        };
        log::info!("catalog loaded: {} vacancies", catalog.len());

        Self {
            catalog: Arc::new(catalog),
            companies: Arc::new(CompanyDirectory::new(data::companies::seed())),
            favorites: Arc::new(FavoritesLedger::new(LocalStorage)),
            catalog_requests: Arc::new(RequestGeneration::new()),
        }
    }
}

pub fn use_services() -> AppServices {
    leptos::prelude::use_context::<AppServices>().expect("AppServices not found in context")
}
