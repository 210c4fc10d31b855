//! Имитация сетевых вызовов: чистые фильтр и пагинатор за искусственной задержкой.

use contracts::domain::a001_vacancy::{Catalog, Vacancy};
use contracts::shared::catalog_filter::{filter_listings, FilterCriteria};
use contracts::shared::pagination::{clamp_page, paginate, total_pages, PageResult};
use contracts::shared::request_generation::RequestGeneration;
use gloo_timers::future::TimeoutFuture;
use std::sync::Arc;

use crate::config::SIMULATED_LATENCY_MS;

pub async fn simulate_latency() {
    TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
}

/// Страница каталога по критериям. Номер страницы приводится к допустимому диапазону.
pub async fn fetch_vacancy_page(
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    page_number: usize,
    page_size: usize,
) -> PageResult<Vacancy> {
    simulate_latency().await;
    let filtered = filter_listings(catalog.all(), &criteria);
    let page_number = clamp_page(page_number, total_pages(filtered.len(), page_size));
    paginate(&filtered, page_number, page_size)
}

/// Как [`fetch_vacancy_page`], но возвращает `None`, если пока запрос выполнялся,
/// был начат более новый.
pub async fn fetch_latest_vacancy_page(
    requests: Arc<RequestGeneration>,
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    page_number: usize,
    page_size: usize,
) -> Option<PageResult<Vacancy>> {
    let ticket = requests.begin();
    let page = fetch_vacancy_page(catalog, criteria, page_number, page_size).await;
    if requests.is_current(ticket) {
        Some(page)
    } else {
        log::debug!("catalog page {} superseded, dropping result", page_number);
        None
    }
}
