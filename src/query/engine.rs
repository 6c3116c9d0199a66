use super::types::{
    ByAuthorResponse, FormattedDateResponse, PagesMaxMinResponse, TitleCountResponse,
    WithoutDateResponse,
};
use crate::catalog::store::BookStore;
use crate::catalog::types::Book;

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;

/// Estimated words printed on a single page.
pub const WORDS_PER_PAGE: i64 = 250;
/// Number of books returned by the most-recent query.
pub const MOST_RECENT_LIMIT: usize = 3;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read-only query layer over an injected `BookStore` snapshot.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<BookStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    fn books(&self) -> &[Book] {
        self.store.books()
    }

    /// Books with strictly more than `min_pages` pages whose title contains
    /// `keyword` (case-sensitive).
    pub fn filter_books(&self, min_pages: i32, keyword: &str) -> Vec<Book> {
        tracing::info!(
            "Filtering books with minPages={} and keyword={}",
            min_pages,
            keyword
        );
        let filtered: Vec<Book> = self
            .books()
            .iter()
            .filter(|book| book.pages > min_pages && book.title.contains(keyword))
            .cloned()
            .collect();
        tracing::info!("Filtered books count: {}", filtered.len());
        filtered
    }

    /// Books whose author full name equals `author_name`, ignoring case.
    pub fn books_by_author(&self, author_name: &str) -> Vec<Book> {
        tracing::info!("Getting books by author: {}", author_name);
        let wanted = author_name.to_lowercase();
        let result: Vec<Book> = self
            .books()
            .iter()
            .filter(|book| book.author.full_name().to_lowercase() == wanted)
            .cloned()
            .collect();
        tracing::info!("Books found for author {}: {}", author_name, result.len());
        result
    }

    pub fn sorted_titles(&self) -> Vec<String> {
        tracing::info!("Sorting book titles alphabetically");
        let mut titles: Vec<String> = self.books().iter().map(|b| b.title.clone()).collect();
        titles.sort();
        tracing::info!("Sorted titles count: {}", titles.len());
        titles
    }

    pub fn count_books_by_author(&self) -> HashMap<String, u64> {
        tracing::info!("Counting books by author");
        let mut counts: HashMap<String, u64> = HashMap::new();
        for book in self.books() {
            counts
                .entry(book.author.full_name())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
        tracing::info!("Counted books by {} authors", counts.len());
        counts
    }

    pub fn title_count_response(&self) -> TitleCountResponse {
        tracing::info!("Generating TitleCountResponse");
        TitleCountResponse {
            titles: self.sorted_titles(),
            author_count: self.count_books_by_author(),
        }
    }

    pub fn formatted_dates(&self) -> Vec<FormattedDateResponse> {
        tracing::info!("Formatting book publication dates");
        let formatted: Vec<FormattedDateResponse> = self
            .books()
            .iter()
            .map(|book| FormattedDateResponse {
                book: book.clone(),
                formatted_date: book.publication_timestamp.and_then(format_timestamp),
            })
            .collect();
        tracing::info!("Formatted dates for {} books", formatted.len());
        formatted
    }

    /// Mean page count, `0.0` for an empty store.
    pub fn average_pages(&self) -> f64 {
        tracing::info!("Calculating average number of pages");
        let books = self.books();
        let avg = if books.is_empty() {
            0.0
        } else {
            books.iter().map(|b| f64::from(b.pages)).sum::<f64>() / books.len() as f64
        };
        tracing::info!("Average pages: {}", avg);
        avg
    }

    /// First book in store order with the highest page count.
    pub fn book_with_most_pages(&self) -> Option<&Book> {
        tracing::info!("Finding book with most pages");
        let max = self
            .books()
            .iter()
            .reduce(|best, book| if book.pages > best.pages { book } else { best });
        tracing::info!(
            "Book with most pages: {}",
            max.map_or("None", |b| b.title.as_str())
        );
        max
    }

    /// First book in store order with the lowest page count.
    pub fn book_with_least_pages(&self) -> Option<&Book> {
        tracing::info!("Finding book with least pages");
        let min = self
            .books()
            .iter()
            .reduce(|best, book| if book.pages < best.pages { book } else { best });
        tracing::info!(
            "Book with least pages: {}",
            min.map_or("None", |b| b.title.as_str())
        );
        min
    }

    pub fn pages_max_min_response(&self) -> PagesMaxMinResponse {
        tracing::info!("Generating PagesMaxMinResponse");
        PagesMaxMinResponse {
            average: self.average_pages(),
            most_pages: self.book_with_most_pages().cloned(),
            least_pages: self.book_with_least_pages().cloned(),
        }
    }

    /// One entry per distinct author with their books and the estimated word count.
    pub fn by_author_response(&self) -> Vec<ByAuthorResponse> {
        tracing::info!("Generating ByAuthorResponse with word count");
        let response: Vec<ByAuthorResponse> = self
            .count_books_by_author()
            .into_keys()
            .map(|author_name| {
                let books = self.books_by_author(&author_name);
                let pages: i64 = books.iter().map(|b| i64::from(b.pages)).sum();
                ByAuthorResponse {
                    author_name,
                    books,
                    word_count: pages * WORDS_PER_PAGE,
                }
            })
            .collect();
        tracing::info!("Generated response for {} authors", response.len());
        response
    }

    pub fn without_date_response(&self) -> WithoutDateResponse {
        tracing::info!("Checking for duplicated authors and books without publication date");
        let duplicated = self.count_books_by_author().values().any(|&count| count > 1);
        let books: Vec<Book> = self
            .books()
            .iter()
            .filter(|b| b.publication_timestamp.is_none())
            .cloned()
            .collect();
        tracing::info!(
            "Found {} books without date and duplicated authors: {}",
            books.len(),
            duplicated
        );
        WithoutDateResponse { duplicated, books }
    }

    /// Up to `MOST_RECENT_LIMIT` dated books, newest first. Equal timestamps keep store order.
    pub fn most_recent_books(&self) -> Vec<Book> {
        tracing::info!("Fetching top {} most recent books", MOST_RECENT_LIMIT);
        let mut dated: Vec<(i64, &Book)> = self
            .books()
            .iter()
            .filter_map(|b| b.publication_timestamp.map(|ts| (ts, b)))
            .collect();
        // sort_by is stable
        dated.sort_by(|a, b| b.0.cmp(&a.0));
        let recent: Vec<Book> = dated
            .into_iter()
            .take(MOST_RECENT_LIMIT)
            .map(|(_, b)| b.clone())
            .collect();
        tracing::info!("Found {} recent books", recent.len());
        recent
    }
}

/// Renders epoch milliseconds as `yyyy-MM-dd` in UTC. Out-of-range values yield `None`.
pub fn format_timestamp(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.format(DATE_FORMAT).to_string())
}
