//! Query Engine Tests
//!
//! Runs every query against a small fixed fixture:
//! - "Book One": 200 pages, John Doe, 2021-01-01
//! - "Book Two": 150 pages, Jane Smith, no date
//! - "Book Three": 300 pages, John Doe, 2023-01-01
//!
//! ## Test Scopes
//! - **Filtering**: Page threshold, keyword and author matching.
//! - **Aggregation**: Sorting, counting, page statistics and word counts.
//! - **Dates**: Formatting, dateless books and most-recent ordering.
//! - **Empty Store**: Neutral defaults for every operation.

#[cfg(test)]
mod tests {
    use crate::catalog::store::BookStore;
    use crate::catalog::types::{Author, Book};
    use crate::query::engine::{MOST_RECENT_LIMIT, QueryEngine, WORDS_PER_PAGE, format_timestamp};
    use std::sync::Arc;

    fn book(id: i64, title: &str, pages: i32, author: Author, ts: Option<i64>) -> Book {
        Book {
            id,
            title: title.to_string(),
            pages,
            synopsis: String::new(),
            author,
            publication_timestamp: ts,
        }
    }

    fn fixture() -> Vec<Book> {
        vec![
            book(1, "Book One", 200, Author::new("John", "Doe", ""), Some(1609459200000)),
            book(2, "Book Two", 150, Author::new("Jane", "Smith", ""), None),
            book(3, "Book Three", 300, Author::new("John", "Doe", ""), Some(1672531200000)),
        ]
    }

    fn engine_with(books: Vec<Book>) -> QueryEngine {
        QueryEngine::new(Arc::new(BookStore::from_books(books)))
    }

    fn engine() -> QueryEngine {
        engine_with(fixture())
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    // ============================================================
    // FILTERING TESTS
    // ============================================================

    #[test]
    fn test_filter_requires_both_conditions() {
        let engine = engine();

        // Book Two matches the keyword but not the page threshold
        assert!(engine.filter_books(180, "Two").is_empty());

        let result = engine.filter_books(180, "Book");
        assert_eq!(titles(&result), vec!["Book One", "Book Three"]);
    }

    #[test]
    fn test_filter_page_threshold_is_exclusive() {
        let result = engine().filter_books(200, "Book");
        assert_eq!(titles(&result), vec!["Book Three"]);
    }

    #[test]
    fn test_filter_keyword_is_case_sensitive() {
        let engine = engine();
        assert!(engine.filter_books(0, "book").is_empty());
        assert_eq!(engine.filter_books(0, "Three").len(), 1);
    }

    #[test]
    fn test_filter_matches_title_only() {
        let mut books = fixture();
        books[0].synopsis = "A tale about dragons".to_string();
        let engine = engine_with(books);

        assert!(engine.filter_books(0, "dragons").is_empty());
        assert!(engine.filter_books(0, "Doe").is_empty());
    }

    #[test]
    fn test_filter_results_satisfy_predicate() {
        let engine = engine();
        for min_pages in [0, 149, 150, 199, 250, 300] {
            for keyword in ["", "Book", "O", "e", "Two"] {
                for b in engine.filter_books(min_pages, keyword) {
                    assert!(b.pages > min_pages);
                    assert!(b.title.contains(keyword));
                    assert!(fixture().contains(&b));
                }
            }
        }
    }

    #[test]
    fn test_books_by_author() {
        let result = engine().books_by_author("John Doe");

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|b| b.author.name == "John"));
        assert_eq!(titles(&result), vec!["Book One", "Book Three"]);
    }

    #[test]
    fn test_books_by_author_ignores_case() {
        let engine = engine();
        assert_eq!(
            engine.books_by_author("john doe"),
            engine.books_by_author("John Doe")
        );
        assert_eq!(engine.books_by_author("JANE SMITH").len(), 1);
    }

    #[test]
    fn test_books_by_author_requires_full_name() {
        let engine = engine();
        assert!(engine.books_by_author("John").is_empty());
        assert!(engine.books_by_author("Unknown Writer").is_empty());
    }

    // ============================================================
    // AGGREGATION TESTS
    // ============================================================

    #[test]
    fn test_sorted_titles() {
        let engine = engine();
        let sorted = engine.sorted_titles();

        assert_eq!(sorted, vec!["Book One", "Book Three", "Book Two"]);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sorted, engine.sorted_titles(), "Should be idempotent");
    }

    #[test]
    fn test_count_books_by_author() {
        let counts = engine().count_books_by_author();

        assert_eq!(counts.get("John Doe"), Some(&2));
        assert_eq!(counts.get("Jane Smith"), Some(&1));
        assert_eq!(counts.values().sum::<u64>(), 3);
    }

    #[test]
    fn test_title_count_response() {
        let response = engine().title_count_response();

        assert_eq!(response.titles.len(), 3);
        assert_eq!(response.author_count.get("John Doe"), Some(&2));
    }

    #[test]
    fn test_average_pages() {
        let avg = engine().average_pages();
        assert!((avg - 650.0 / 3.0).abs() < 1e-9, "Got {}", avg);
    }

    #[test]
    fn test_most_and_least_pages() {
        let engine = engine();
        assert_eq!(engine.book_with_most_pages().unwrap().title, "Book Three");
        assert_eq!(engine.book_with_least_pages().unwrap().title, "Book Two");
    }

    #[test]
    fn test_page_ties_resolve_to_first_in_store_order() {
        let engine = engine_with(vec![
            book(1, "First Short", 100, Author::new("A", "A", ""), None),
            book(2, "First Long", 400, Author::new("B", "B", ""), None),
            book(3, "Second Short", 100, Author::new("C", "C", ""), None),
            book(4, "Second Long", 400, Author::new("D", "D", ""), None),
        ]);

        assert_eq!(engine.book_with_most_pages().unwrap().id, 2);
        assert_eq!(engine.book_with_least_pages().unwrap().id, 1);
    }

    #[test]
    fn test_pages_max_min_response() {
        let response = engine().pages_max_min_response();

        assert!((response.average - 216.66).abs() < 0.1);
        assert_eq!(response.most_pages.unwrap().title, "Book Three");
        assert_eq!(response.least_pages.unwrap().title, "Book Two");
    }

    #[test]
    fn test_by_author_response_word_count() {
        let responses = engine().by_author_response();
        assert_eq!(responses.len(), 2);

        let john = responses
            .iter()
            .find(|r| r.author_name == "John Doe")
            .expect("John Doe entry");
        assert_eq!(john.books.len(), 2);
        assert_eq!(john.word_count, 125000);

        let jane = responses
            .iter()
            .find(|r| r.author_name == "Jane Smith")
            .expect("Jane Smith entry");
        assert_eq!(jane.word_count, 150 * WORDS_PER_PAGE);
    }

    // ============================================================
    // DATE TESTS
    // ============================================================

    #[test]
    fn test_formatted_dates() {
        let responses = engine().formatted_dates();

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0].formatted_date.as_deref(), Some("2021-01-01"));
        assert_eq!(responses[1].formatted_date, None);
        assert_eq!(responses[2].formatted_date.as_deref(), Some("2023-01-01"));
        assert_eq!(responses[1].book.title, "Book Two");
    }

    #[test]
    fn test_format_timestamp_uses_utc() {
        // 2021-01-01T23:59:59.999Z
        assert_eq!(format_timestamp(1609545599999).as_deref(), Some("2021-01-01"));
        assert_eq!(format_timestamp(0).as_deref(), Some("1970-01-01"));
        assert_eq!(format_timestamp(-86400000).as_deref(), Some("1969-12-31"));
        assert_eq!(format_timestamp(i64::MAX), None);
    }

    #[test]
    fn test_without_date_response() {
        let response = engine().without_date_response();

        assert!(response.duplicated);
        assert_eq!(titles(&response.books), vec!["Book Two"]);
    }

    #[test]
    fn test_without_date_not_duplicated() {
        let mut books = fixture();
        books.truncate(2);
        let response = engine_with(books).without_date_response();

        assert!(!response.duplicated);
        assert_eq!(response.books.len(), 1);
    }

    #[test]
    fn test_most_recent_books() {
        let recent = engine().most_recent_books();

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].title, "Book Three");
        assert_eq!(recent[1].title, "Book One");
    }

    #[test]
    fn test_most_recent_limit_and_order() {
        let author = || Author::new("A", "B", "");
        let engine = engine_with(vec![
            book(1, "Oldest", 10, author(), Some(1_000)),
            book(2, "Tied A", 10, author(), Some(5_000)),
            book(3, "Undated", 10, author(), None),
            book(4, "Newest", 10, author(), Some(9_000)),
            book(5, "Tied B", 10, author(), Some(5_000)),
        ]);

        let recent = engine.most_recent_books();
        assert_eq!(recent.len(), MOST_RECENT_LIMIT);
        assert_eq!(titles(&recent), vec!["Newest", "Tied A", "Tied B"]);
        assert!(recent.iter().all(|b| b.publication_timestamp.is_some()));
        assert!(
            recent
                .windows(2)
                .all(|w| w[0].publication_timestamp >= w[1].publication_timestamp)
        );
    }

    // ============================================================
    // EMPTY STORE TESTS
    // ============================================================

    #[test]
    fn test_empty_store_defaults() {
        let engine = engine_with(vec![]);

        assert!(engine.filter_books(0, "").is_empty());
        assert!(engine.books_by_author("John Doe").is_empty());
        assert!(engine.sorted_titles().is_empty());
        assert!(engine.count_books_by_author().is_empty());
        assert!(engine.formatted_dates().is_empty());
        assert_eq!(engine.average_pages(), 0.0);
        assert!(engine.book_with_most_pages().is_none());
        assert!(engine.book_with_least_pages().is_none());
        assert!(engine.by_author_response().is_empty());
        assert!(engine.most_recent_books().is_empty());

        let without_date = engine.without_date_response();
        assert!(!without_date.duplicated);
        assert!(without_date.books.is_empty());

        let stats = engine.pages_max_min_response();
        assert_eq!(stats.average, 0.0);
        assert!(stats.most_pages.is_none());
        assert!(stats.least_pages.is_none());
    }
}
