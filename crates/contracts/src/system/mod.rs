pub mod auth;
pub mod favorites;
pub mod session;

pub use favorites::{FavoritesLedger, FAVORITES_KEY};
pub use session::{SessionFlags, ACCOUNT_TYPE_KEY, IS_AUTHENTICATED_KEY};
