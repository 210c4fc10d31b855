//! Флаги сессии. Это не учетные данные: нет ни токенов, ни срока действия.

use crate::enums::AccountType;
use crate::shared::kv_store::KeyValueStore;

pub const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";
pub const ACCOUNT_TYPE_KEY: &str = "accountType";

pub struct SessionFlags<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionFlags<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Помечает пользователя аутентифицированным; `account_type` записывается только если задан.
    pub fn set_authenticated(&self, account_type: Option<AccountType>) {
        if let Err(e) = self.store.set(IS_AUTHENTICATED_KEY, "true") {
            log::warn!("session: failed to set {}: {}", IS_AUTHENTICATED_KEY, e);
        }
        if let Some(account_type) = account_type {
            if let Err(e) = self.store.set(ACCOUNT_TYPE_KEY, account_type.code()) {
                log::warn!("session: failed to set {}: {}", ACCOUNT_TYPE_KEY, e);
            }
        }
        log::info!("session: signed in ({:?})", account_type);
    }

    /// Снимает флаг аутентификации. `accountType` остается.
    pub fn clear_authenticated(&self) {
        if let Err(e) = self.store.delete(IS_AUTHENTICATED_KEY) {
            log::warn!("session: failed to clear {}: {}", IS_AUTHENTICATED_KEY, e);
        }
        log::info!("session: signed out");
    }

    pub fn is_authenticated(&self) -> bool {
        match self.store.get(IS_AUTHENTICATED_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                log::warn!("session: read failed: {}", e);
                false
            }
        }
    }

    pub fn account_type(&self) -> Option<AccountType> {
        match self.store.get(ACCOUNT_TYPE_KEY) {
            Ok(value) => value.as_deref().and_then(AccountType::from_code),
            Err(e) => {
                log::warn!("session: read failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::kv_store::testing::BrokenStore;
    use crate::shared::kv_store::MemoryStore;

    #[test]
    fn test_sign_in_and_out() {
        let store = MemoryStore::new();
        let session = SessionFlags::new(&store);
        assert!(!session.is_authenticated());
        assert_eq!(session.account_type(), None);

        session.set_authenticated(Some(AccountType::Business));
        assert!(session.is_authenticated());
        assert_eq!(session.account_type(), Some(AccountType::Business));

        session.clear_authenticated();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_account_type_survives_sign_out() {
        let store = MemoryStore::new();
        let session = SessionFlags::new(&store);
        session.set_authenticated(Some(AccountType::Advertiser));
        session.clear_authenticated();
        assert_eq!(session.account_type(), Some(AccountType::Advertiser));
        assert_eq!(store.get(IS_AUTHENTICATED_KEY), Ok(None));
    }

    #[test]
    fn test_login_without_type_keeps_previous_type() {
        let store = MemoryStore::new();
        let session = SessionFlags::new(&store);
        session.set_authenticated(Some(AccountType::Business));
        session.clear_authenticated();
        session.set_authenticated(None);
        assert!(session.is_authenticated());
        assert_eq!(session.account_type(), Some(AccountType::Business));
    }

    #[test]
    fn test_persisted_layout() {
        let store = MemoryStore::new();
        SessionFlags::new(&store).set_authenticated(Some(AccountType::Advertiser));
        assert_eq!(store.get(IS_AUTHENTICATED_KEY), Ok(Some("true".into())));
        assert_eq!(store.get(ACCOUNT_TYPE_KEY), Ok(Some("advertiser".into())));
    }

    #[test]
    fn test_corrupt_values_read_as_defaults() {
        let store = MemoryStore::new();
        store.set(IS_AUTHENTICATED_KEY, "yes").unwrap();
        store.set(ACCOUNT_TYPE_KEY, "admin").unwrap();
        let session = SessionFlags::new(&store);
        assert!(!session.is_authenticated());
        assert_eq!(session.account_type(), None);
    }

    #[test]
    fn test_broken_store() {
        let session = SessionFlags::new(BrokenStore);
        session.set_authenticated(Some(AccountType::Business));
        assert!(!session.is_authenticated());
        assert_eq!(session.account_type(), None);
        session.clear_authenticated();
    }
}
