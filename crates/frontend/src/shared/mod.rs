pub mod components;
pub mod data;
pub mod icons;
pub mod list_utils;
pub mod mock_api;
pub mod page_frame;
pub mod services;
pub mod storage;
