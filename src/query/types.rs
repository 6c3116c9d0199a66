use crate::catalog::types::Book;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub min_pages: i32,
    pub keyword: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorParams {
    pub author_name: String,
}

/// All titles in ascending order plus the number of books per author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCountResponse {
    pub titles: Vec<String>,
    pub author_count: HashMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDateResponse {
    pub book: Book,
    /// `yyyy-MM-dd` in UTC, `None` when the book has no publication timestamp.
    pub formatted_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesMaxMinResponse {
    pub average: f64,
    pub most_pages: Option<Book>,
    pub least_pages: Option<Book>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByAuthorResponse {
    pub author_name: String,
    pub books: Vec<Book>,
    pub word_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithoutDateResponse {
    /// True when at least one author has more than one book.
    pub duplicated: bool,
    pub books: Vec<Book>,
}
