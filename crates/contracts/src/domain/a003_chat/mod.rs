pub mod aggregate;

pub use aggregate::{Author, ChatMessage, Conversation, CANNED_REPLIES};
