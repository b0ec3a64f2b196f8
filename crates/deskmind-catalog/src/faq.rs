//! FAQ records and filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ALL_CATEGORIES;

/// One frequently-asked question.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub tags: Vec<String>,
    pub views: u32,
    pub last_updated: NaiveDate,
    pub is_published: bool,
}

/// The fixed FAQ catalog.
pub fn mock_faqs() -> Vec<Faq> {
    vec![
        Faq {
            id: Uuid::new_v4(),
            question: "How do I reset my password?".to_string(),
            answer: "To reset your password, go to the login page and click \"Forgot Password\". Enter your email address and follow the instructions sent to your inbox.".to_string(),
            category: "Authentication".to_string(),
            tags: tags(&["password", "login", "security"]),
            views: 1247,
            last_updated: date(2024, 1, 15),
            is_published: true,
        },
        Faq {
            id: Uuid::new_v4(),
            question: "What are the system requirements?".to_string(),
            answer: "Our system requires: Windows 10+ or macOS 10.15+, 8GB RAM minimum, 2GB free disk space, and an internet connection.".to_string(),
            category: "Technical".to_string(),
            tags: tags(&["requirements", "installation", "system"]),
            views: 892,
            last_updated: date(2024, 1, 14),
            is_published: true,
        },
        Faq {
            id: Uuid::new_v4(),
            question: "How do I configure SSL certificates?".to_string(),
            answer: "SSL certificate configuration involves several steps: 1. Obtain a valid certificate, 2. Upload it to the system, 3. Configure the web server, 4. Test the connection.".to_string(),
            category: "Security".to_string(),
            tags: tags(&["ssl", "security", "certificates", "https"]),
            views: 634,
            last_updated: date(2024, 1, 13),
            is_published: true,
        },
        Faq {
            id: Uuid::new_v4(),
            question: "Database connection troubleshooting".to_string(),
            answer: "If you're experiencing database connection issues, check: 1. Connection string, 2. Network connectivity, 3. Database server status, 4. Firewall settings.".to_string(),
            category: "Database".to_string(),
            tags: tags(&["database", "connection", "troubleshooting"]),
            views: 445,
            last_updated: date(2024, 1, 12),
            is_published: false,
        },
    ]
}

/// FAQ categories offered by the filter control.
pub fn categories() -> Vec<&'static str> {
    vec![
        ALL_CATEGORIES,
        "Authentication",
        "Technical",
        "Security",
        "Database",
    ]
}

/// Filter by case-insensitive substring over question, answer, and tags,
/// plus exact category.
pub fn filter(faqs: &[Faq], query: &str, category: &str) -> Vec<Faq> {
    let query = query.to_lowercase();
    faqs.iter()
        .filter(|faq| {
            faq.question.to_lowercase().contains(&query)
                || faq.answer.to_lowercase().contains(&query)
                || faq.tags.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .filter(|faq| category == ALL_CATEGORIES || faq.category == category)
        .cloned()
        .collect()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
