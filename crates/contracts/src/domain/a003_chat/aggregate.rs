//! Имитация чата: разговоры хранятся в памяти, ответы собеседника
//! подставляются из фиксированного списка.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ответы, которыми "собеседник" реагирует на сообщения по очереди
pub const CANNED_REPLIES: &[&str] = &[
    "Дякуємо за повідомлення! Ми відповімо найближчим часом.",
    "Чудово, давайте обговоримо деталі.",
    "Надішліть, будь ласка, ваше резюме.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Me,
    Peer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: Author,
    pub text: String,
    #[serde(rename = "sentAt")]
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u32,
    /// Имя собеседника (компания или рекламодатель)
    pub peer: String,
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(id: u32, peer: impl Into<String>) -> Self {
        Self {
            id,
            peer: peer.into(),
            messages: Vec::new(),
        }
    }

    /// Добавляет сообщение пользователя. Пустой текст игнорируется.
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push(Author::Me, text.to_string(), now);
        self.messages.last()
    }

    /// Ответ собеседника: следующий из `CANNED_REPLIES` по кругу
    pub fn auto_reply(&mut self, now: DateTime<Utc>) -> &ChatMessage {
        let replies_so_far = self
            .messages
            .iter()
            .filter(|m| m.author == Author::Peer)
            .count();
        let text = CANNED_REPLIES[replies_so_far % CANNED_REPLIES.len()].to_string();
        self.push(Author::Peer, text, now);
        &self.messages[self.messages.len() - 1]
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    fn push(&mut self, author: Author, text: String, now: DateTime<Utc>) {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            author,
            text,
            sent_at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_ignores_blank_text() {
        let mut c = Conversation::new(1, "Acme");
        assert!(c.send("   ", Utc::now()).is_none());
        assert!(c.messages.is_empty());

        let sent = c.send(" Привіт ", Utc::now()).cloned().unwrap();
        assert_eq!(sent.text, "Привіт");
        assert_eq!(sent.author, Author::Me);
    }

    #[test]
    fn test_auto_reply_cycles_through_canned_replies() {
        let mut c = Conversation::new(1, "Acme");
        let now = Utc::now();
        for i in 0..CANNED_REPLIES.len() + 1 {
            c.send("питання", now);
            let reply = c.auto_reply(now).text.clone();
            assert_eq!(reply, CANNED_REPLIES[i % CANNED_REPLIES.len()]);
        }
        assert_eq!(c.messages.len(), (CANNED_REPLIES.len() + 1) * 2);
        assert_eq!(c.last_message().map(|m| m.author), Some(Author::Peer));
    }
}
