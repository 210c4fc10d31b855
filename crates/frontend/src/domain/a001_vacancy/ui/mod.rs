pub mod details;
pub mod favorites;
pub mod list;
