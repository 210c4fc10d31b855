//! Настройки клиента. Все задается константами при сборке.

/// Количество карточек вакансий на странице каталога
pub const PAGE_SIZE: usize = 9;

/// Варианты размера страницы в переключателе
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [9, 18, 36];

/// Искусственная задержка "сетевых" вызовов, мс
pub const SIMULATED_LATENCY_MS: u32 = 400;

/// Задержка автоответа в чате, мс
pub const CHAT_REPLY_DELAY_MS: u32 = 1200;

/// Задержка debounce поля поиска, мс
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const APP_TITLE: &str = "Vacancy Marketplace";
