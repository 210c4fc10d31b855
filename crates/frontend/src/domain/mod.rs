pub mod a001_vacancy;
pub mod a002_company;
pub mod a003_chat;
