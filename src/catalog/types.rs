//! Book Store Data Types
//!
//! The records exactly as they appear in the JSON source file.

use serde::{Deserialize, Serialize};

/// Author embedded in each book record. Authors have no identity of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub first_surname: Option<String>,
    #[serde(default)]
    pub second_surname: Option<String>,
}

impl Author {
    pub fn new(name: &str, first_surname: &str, second_surname: &str) -> Self {
        Self {
            name: name.to_string(),
            first_surname: Some(first_surname.to_string()),
            second_surname: Some(second_surname.to_string()),
        }
    }

    /// Display name used as the grouping and matching key: the given name,
    /// followed by the first surname when one is present.
    pub fn full_name(&self) -> String {
        match self.first_surname.as_deref() {
            Some(surname) if !surname.is_empty() => format!("{} {}", self.name, surname),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub pages: i32,
    #[serde(default)]
    pub synopsis: String,
    pub author: Author,
    /// Publication instant in epoch milliseconds, `None` when unknown.
    #[serde(default)]
    pub publication_timestamp: Option<i64>,
}
