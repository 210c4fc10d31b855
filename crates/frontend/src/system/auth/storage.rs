use contracts::enums::AccountType;
use contracts::system::session::SessionFlags;

use crate::shared::storage::LocalStorage;

fn session() -> SessionFlags<LocalStorage> {
    SessionFlags::new(LocalStorage)
}

pub fn is_authenticated() -> bool {
    session().is_authenticated()
}

pub fn get_account_type() -> Option<AccountType> {
    session().account_type()
}

pub fn save_authenticated(account_type: Option<AccountType>) {
    session().set_authenticated(account_type);
}

/// `accountType` после выхода остается в хранилище
pub fn clear_authenticated() {
    session().clear_authenticated();
}
