use serde::{Deserialize, Serialize};

/// Одна страница результата. `page_number` считается с 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> PageResult<T> {
    pub fn has_previous(&self) -> bool {
        self.page_number > 1 && self.page_number <= self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.page_number >= 1 && self.page_number < self.total_pages
    }
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Режет `listings` на страницу `page_number` размером `page_size`.
///
/// Номер страницы вне `1..=total_pages` (и `page_size == 0`) дает пустую
/// страницу с корректными `total_count`/`total_pages`.
pub fn paginate<T: Clone>(listings: &[T], page_number: usize, page_size: usize) -> PageResult<T> {
    let total_count = listings.len();
    let total_pages = total_pages(total_count, page_size);

    let items = if page_number == 0 || page_size == 0 {
        Vec::new()
    } else {
        let start = (page_number - 1).saturating_mul(page_size);
        let end = start.saturating_add(page_size).min(total_count);
        if start >= total_count {
            Vec::new()
        } else {
            listings[start..end].to_vec()
        }
    };

    PageResult {
        items,
        total_count,
        page_number,
        page_size,
        total_pages,
    }
}

/// Приводит запрошенный номер страницы к `1..=total_pages` (или 1, если страниц нет)
pub fn clamp_page(page_number: usize, total_pages: usize) -> usize {
    page_number.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let page = paginate::<u32>(&[], 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_ten_items_page_size_nine() {
        let items: Vec<u32> = (1..=10).collect();

        let first = paginate(&items, 1, 9);
        assert_eq!(first.items.len(), 9);
        assert_eq!(first.total_pages, 2);
        assert!(first.has_next());

        let second = paginate(&items, 2, 9);
        assert_eq!(second.items, vec![10]);
        assert!(second.has_previous());
        assert!(!second.has_next());
    }

    #[test]
    fn test_pages_partition_the_input() {
        let items: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let pages = total_pages(items.len(), size);
            let mut joined = Vec::new();
            for n in 1..=pages {
                let page = paginate(&items, n, size);
                assert!(page.items.len() <= size);
                joined.extend(page.items);
            }
            assert_eq!(joined, items, "page size {}", size);
        }
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..5).collect();
        assert!(paginate(&items, 0, 2).items.is_empty());
        assert!(paginate(&items, 4, 2).items.is_empty());
        assert!(paginate(&items, usize::MAX, usize::MAX).items.is_empty());

        let zero = paginate(&items, 1, 0);
        assert!(zero.items.is_empty());
        assert_eq!(zero.total_pages, 0);
        assert_eq!(zero.total_count, 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
