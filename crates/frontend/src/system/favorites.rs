//! Реактивная обертка над `FavoritesLedger`: каждое изменение увеличивает версию,
//! поэтому все места, читающие избранное, пересчитываются.

use contracts::domain::a001_vacancy::VacancyId;
use contracts::system::favorites::FavoritesLedger;
use leptos::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::shared::storage::LocalStorage;

#[derive(Clone, Copy)]
pub struct FavoritesContext {
    ledger: StoredValue<Arc<FavoritesLedger<LocalStorage>>>,
    version: RwSignal<u64>,
}

impl FavoritesContext {
    pub fn new(ledger: Arc<FavoritesLedger<LocalStorage>>) -> Self {
        Self {
            ledger: StoredValue::new(ledger),
            version: RwSignal::new(0),
        }
    }

    pub fn is_favorite(&self, id: VacancyId) -> bool {
        self.version.track();
        self.ledger.with_value(|l| l.is_favorite(id))
    }

    pub fn ids(&self) -> BTreeSet<VacancyId> {
        self.version.track();
        self.ledger.with_value(|l| l.favorites())
    }

    pub fn count(&self) -> usize {
        self.ids().len()
    }

    /// Возвращает новое состояние: `true`, если вакансия теперь в избранном
    pub fn toggle(&self, id: VacancyId) -> bool {
        let now_favorite = self.ledger.with_value(|l| l.toggle_favorite(id));
        self.version.update(|v| *v = v.wrapping_add(1));
        now_favorite
    }
}

pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>().expect("FavoritesContext not found in context")
}
