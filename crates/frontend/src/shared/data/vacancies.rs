use contracts::domain::a001_vacancy::Vacancy;

/// Категории каталога: код тега и название для интерфейса
pub const CATEGORIES: &[(&str, &str)] = &[
    ("it", "IT та розробка"),
    ("design", "Дизайн"),
    ("marketing", "Маркетинг"),
    ("sales", "Продажі"),
    ("finance", "Фінанси"),
    ("logistics", "Логістика"),
];

pub fn category_label(tag: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(code, _)| *code == tag)
        .map(|(_, label)| *label)
        .unwrap_or(tag)
}

pub fn seed() -> Vec<Vacancy> {
    vec![
        Vacancy::new(1, "Rust Backend Developer", "TechNova", "Київ", "2 години тому")
            .with_salary("від 90 000 грн")
            .with_experience("3+ роки")
            .with_categories(["it"])
            .with_progress(6)
            .mark_new(),
        Vacancy::new(2, "UI/UX дизайнер", "Pixel Studio", "Львів", "5 годин тому")
            .with_salary("45 000 – 60 000 грн")
            .with_experience("2+ роки")
            .with_categories(["design", "it"])
            .with_progress(5)
            .mark_new(),
        Vacancy::new(3, "SMM-менеджер", "Brandly", "Віддалено", "вчора")
            .with_salary("25 000 грн")
            .with_categories(["marketing"])
            .with_progress(3),
        Vacancy::new(4, "Менеджер з продажу", "AgroTrade", "Дніпро", "вчора")
            .with_salary("від 30 000 грн + бонуси")
            .with_experience("1+ рік")
            .with_categories(["sales"])
            .with_progress(4),
        Vacancy::new(5, "Frontend Engineer", "Globex GmbH", "Berlin", "2 дні тому")
            .with_salary("€4 500")
            .with_experience("4+ роки")
            .with_categories(["it"])
            .with_progress(7),
        Vacancy::new(6, "Бухгалтер", "FinPro", "Харків", "3 дні тому")
            .with_experience("3+ роки")
            .with_categories(["finance"])
            .with_progress(2),
        Vacancy::new(7, "Логіст", "CargoLine", "Одеса", "3 дні тому")
            .with_salary("35 000 грн")
            .with_categories(["logistics"])
            .with_progress(3),
        Vacancy::new(8, "QA Automation Engineer", "TechNova", "Віддалено", "4 дні тому")
            .with_salary("від 70 000 грн")
            .with_experience("2+ роки")
            .with_categories(["it"])
            .with_progress(5),
        Vacancy::new(9, "Графічний дизайнер", "Pixel Studio", "Київ", "тиждень тому")
            .with_categories(["design"])
            .with_progress(1),
        Vacancy::new(10, "Performance-маркетолог", "Brandly", "Warszawa", "тиждень тому")
            .with_salary("12 000 PLN")
            .with_experience("3+ роки")
            .with_categories(["marketing"])
            .with_progress(4),
        Vacancy::new(11, "Key Account Manager", "AgroTrade", "Київ", "2 тижні тому")
            .with_salary("від 50 000 грн")
            .with_categories(["sales"])
            .with_progress(3),
        Vacancy::new(12, "Фінансовий аналітик", "FinPro", "Remote (EU)", "2 тижні тому")
            .with_experience("2+ роки")
            .with_categories(["finance", "it"])
            .with_progress(4),
        Vacancy::new(13, "Водій-експедитор", "CargoLine", "Львів", "3 тижні тому")
            .with_salary("28 000 грн")
            .with_categories(["logistics"]),
        Vacancy::new(14, "DevOps Engineer", "Globex GmbH", "Praha", "місяць тому")
            .with_salary("€5 000")
            .with_experience("5+ років")
            .with_categories(["it"])
            .with_progress(6),
    ]
}
