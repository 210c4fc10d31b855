//! Избранные вакансии, сохраненные в key-value хранилище как JSON-массив id.

use std::collections::BTreeSet;

use crate::domain::a001_vacancy::VacancyId;
use crate::shared::kv_store::KeyValueStore;

pub const FAVORITES_KEY: &str = "favoriteVacancies";

pub struct FavoritesLedger<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> FavoritesLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Текущий набор избранных. Отсутствующая или поврежденная запись дает пустой набор.
    pub fn favorites(&self) -> BTreeSet<VacancyId> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BTreeSet::new(),
            Err(e) => {
                log::warn!("favorites: read failed, treating as empty: {}", e);
                return BTreeSet::new();
            }
        };

        match serde_json::from_str::<Vec<VacancyId>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                log::warn!("favorites: corrupt value {:?} ignored: {}", raw, e);
                BTreeSet::new()
            }
        }
    }

    pub fn is_favorite(&self, id: VacancyId) -> bool {
        self.favorites().contains(&id)
    }

    /// Переключает членство `id` и возвращает новое состояние (`true` — теперь в избранных).
    /// Новый набор записывается в хранилище до возврата.
    pub fn toggle_favorite(&self, id: VacancyId) -> bool {
        let mut ids = self.favorites();
        let now_favorite = if ids.remove(&id) {
            false
        } else {
            ids.insert(id);
            true
        };
        self.persist(&ids);
        log::debug!("favorites: {} -> {}", id, now_favorite);
        now_favorite
    }

    fn persist(&self, ids: &BTreeSet<VacancyId>) {
        let list: Vec<VacancyId> = ids.iter().copied().collect();
        let json = match serde_json::to_string(&list) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("favorites: serialize failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(FAVORITES_KEY, &json) {
            log::warn!("favorites: write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::kv_store::testing::BrokenStore;
    use crate::shared::kv_store::MemoryStore;

    #[test]
    fn test_toggle_twice_restores_state() {
        let store = MemoryStore::new();
        let ledger = FavoritesLedger::new(&store);
        let id = VacancyId(42);

        assert!(!ledger.is_favorite(id));
        assert!(ledger.toggle_favorite(id));
        assert!(ledger.is_favorite(id));
        assert!(!ledger.toggle_favorite(id));
        assert!(!ledger.is_favorite(id));
    }

    #[test]
    fn test_persisted_layout_is_json_int_array() {
        let store = MemoryStore::new();
        let ledger = FavoritesLedger::new(&store);
        ledger.toggle_favorite(VacancyId(7));
        ledger.toggle_favorite(VacancyId(3));

        let raw = store.get(FAVORITES_KEY).unwrap().unwrap();
        let mut parsed: Vec<u32> = serde_json::from_str(&raw).unwrap();
        parsed.sort_unstable();
        assert_eq!(parsed, vec![3, 7]);
    }

    #[test]
    fn test_reads_value_written_by_another_surface() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, "[1, 2, 5]").unwrap();
        let ledger = FavoritesLedger::new(&store);
        assert!(ledger.is_favorite(VacancyId(5)));
        assert!(!ledger.is_favorite(VacancyId(4)));
    }

    #[test]
    fn test_two_ledgers_on_one_store_converge() {
        let store = MemoryStore::new();
        let card = FavoritesLedger::new(&store);
        let details = FavoritesLedger::new(&store);
        let id = VacancyId(9);

        assert!(card.toggle_favorite(id));
        assert!(details.is_favorite(id));
        assert!(!details.toggle_favorite(id));
        assert!(!card.is_favorite(id));
    }

    #[test]
    fn test_corrupt_value_is_empty_set() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{not json").unwrap();
        let ledger = FavoritesLedger::new(&store);
        assert!(!ledger.is_favorite(VacancyId(1)));

        // следующий toggle перезаписывает поврежденное значение
        assert!(ledger.toggle_favorite(VacancyId(1)));
        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_broken_store_never_panics() {
        let ledger = FavoritesLedger::new(BrokenStore);
        assert!(!ledger.is_favorite(VacancyId(1)));
        assert!(ledger.toggle_favorite(VacancyId(1)));
        assert!(ledger.favorites().is_empty());
    }
}
