use contracts::domain::a002_company::Company;

pub fn seed() -> Vec<Company> {
    vec![
        Company::new("TechNova", "Київ", "Продуктова IT-компанія, що розробляє платформи для логістики та e-commerce.")
            .with_website("https://technova.example")
            .with_employee_count("200–500"),
        Company::new("Pixel Studio", "Львів", "Дизайн-студія повного циклу: брендинг, інтерфейси, моушн.")
            .with_employee_count("20–50"),
        Company::new("Brandly", "Київ", "Агенція digital-маркетингу для малого та середнього бізнесу.")
            .with_website("https://brandly.example"),
        Company::new("AgroTrade", "Дніпро", "Дистриб'ютор агропродукції з мережею складів по всій Україні.")
            .with_employee_count("500+"),
        Company::new("Globex GmbH", "Berlin", "International software vendor hiring engineers across Europe.")
            .with_website("https://globex.example")
            .with_employee_count("1000+"),
        Company::new("FinPro", "Харків", "Аутсорсинг бухгалтерії та фінансової аналітики."),
        Company::new("CargoLine", "Одеса", "Міжнародні вантажоперевезення та митна логістика.")
            .with_employee_count("100–200"),
    ]
}
