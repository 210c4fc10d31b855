pub mod badge;
pub mod select;

pub use badge::{Badge, BadgeTone, CategoryBadge, NewBadge};
pub use select::Select;
