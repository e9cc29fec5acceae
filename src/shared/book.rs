/**
 * Book Data Structures
 *
 * `BookDraft` is what the add-book form collects; `Book` is the record the
 * backend returns once it has assigned an id. The client never invents ids.
 */
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder shown in the table when the backend returned no id
pub const MISSING_ID: &str = "---";

/// A scalar the backend may send either as a JSON number or a string.
///
/// Price and quantity are typed into text inputs and sent as strings, but
/// nothing stops the backend from normalising them to numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for BookValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookValue::Number(n) => write!(f, "{}", n),
            BookValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for BookValue {
    fn from(value: &str) -> Self {
        BookValue::Text(value.to_string())
    }
}

impl From<i64> for BookValue {
    fn from(value: i64) -> Self {
        BookValue::Number(value.into())
    }
}

/// Book fields as typed into the add-book form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub summary: String,
    pub price: String,
    pub quantity: String,
}

/// A book record as created by the backend
///
/// Fields the client does not know about are kept in `extra` so the cached
/// copy is exactly what the server returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookValue>,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    pub price: BookValue,
    pub quantity: BookValue,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Book {
    /// Id as rendered in the table
    pub fn display_id(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| MISSING_ID.to_string())
    }
}

/// One visible row of the book table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub title: String,
    pub quantity: String,
    pub price: String,
    pub id: String,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            quantity: book.quantity.to_string(),
            price: book.price.to_string(),
            id: book.display_id(),
        }
    }
}
