//! Счетчик поколений запросов: результат, полученный по устаревшему билету,
//! отбрасывается, чтобы медленный ответ не перезаписал более свежий.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начинает новый запрос; все ранее выданные билеты становятся устаревшими
    pub fn begin(&self) -> Ticket {
        let next = self.current.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// Делает устаревшими все выданные билеты, не начиная нового запроса
    pub fn invalidate(&self) {
        self.begin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_invalidate() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }
}
