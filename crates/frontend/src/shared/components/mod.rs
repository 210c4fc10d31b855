pub mod card_animated;
pub mod favorite_button;
pub mod filter_panel;
pub mod pagination_controls;
pub mod ui;
pub mod vacancy_card;
