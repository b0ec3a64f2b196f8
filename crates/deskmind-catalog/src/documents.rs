//! Knowledge-base document records and filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ALL_CATEGORIES;

/// File format of an indexed document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Pdf,
    Html,
    Txt,
    Md,
}

/// Indexing state of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Indexed,
    Processing,
    Error,
}

/// One knowledge-base document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub doc_type: DocumentType,
    pub size: String,
    pub upload_date: NaiveDate,
    pub status: DocumentStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_count: Option<u32>,
}

/// The fixed document catalog.
pub fn mock_documents() -> Vec<Document> {
    vec![
        Document {
            id: Uuid::new_v4(),
            name: "Installation Guide.pdf".to_string(),
            doc_type: DocumentType::Pdf,
            size: "2.3 MB".to_string(),
            upload_date: date(2024, 1, 15),
            status: DocumentStatus::Indexed,
            category: "Installation".to_string(),
            vector_count: Some(245),
        },
        Document {
            id: Uuid::new_v4(),
            name: "API Documentation.html".to_string(),
            doc_type: DocumentType::Html,
            size: "1.8 MB".to_string(),
            upload_date: date(2024, 1, 14),
            status: DocumentStatus::Indexed,
            category: "API".to_string(),
            vector_count: Some(189),
        },
        Document {
            id: Uuid::new_v4(),
            name: "Troubleshooting FAQ.md".to_string(),
            doc_type: DocumentType::Md,
            size: "456 KB".to_string(),
            upload_date: date(2024, 1, 13),
            status: DocumentStatus::Processing,
            category: "Support".to_string(),
            vector_count: None,
        },
        Document {
            id: Uuid::new_v4(),
            name: "Configuration Manual.pdf".to_string(),
            doc_type: DocumentType::Pdf,
            size: "3.1 MB".to_string(),
            upload_date: date(2024, 1, 12),
            status: DocumentStatus::Indexed,
            category: "Configuration".to_string(),
            vector_count: Some(312),
        },
    ]
}

/// Document categories offered by the filter control.
pub fn categories() -> Vec<&'static str> {
    vec![
        ALL_CATEGORIES,
        "Installation",
        "API",
        "Support",
        "Configuration",
    ]
}

/// Filter by case-insensitive name substring and exact category.
pub fn filter(documents: &[Document], query: &str, category: &str) -> Vec<Document> {
    let query = query.to_lowercase();
    documents
        .iter()
        .filter(|doc| doc.name.to_lowercase().contains(&query))
        .filter(|doc| category == ALL_CATEGORIES || doc.category == category)
        .cloned()
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
