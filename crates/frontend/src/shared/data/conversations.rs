use chrono::{Duration, Utc};
use contracts::domain::a003_chat::Conversation;

pub fn seed() -> Vec<Conversation> {
    let earlier = Utc::now() - Duration::hours(3);

    let mut technova = Conversation::new(1, "TechNova");
    technova.send("Добрий день! Чи актуальна вакансія Rust Backend Developer?", earlier);
    technova.auto_reply(earlier + Duration::minutes(5));

    let mut brandly = Conversation::new(2, "Brandly");
    brandly.send("Цікавить співпраця щодо розміщення реклами.", earlier);

    vec![technova, brandly, Conversation::new(3, "Pixel Studio")]
}
