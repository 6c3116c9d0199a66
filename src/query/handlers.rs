use super::engine::QueryEngine;
use super::types::{
    AuthorParams, ByAuthorResponse, FilterParams, FormattedDateResponse, PagesMaxMinResponse,
    TitleCountResponse, WithoutDateResponse,
};
use crate::catalog::types::Book;
use crate::error::ApiError;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

// --- API Endpoints ---

pub const ENDPOINT_FILTER: &str = "/api/books/filter";
pub const ENDPOINT_AUTHOR: &str = "/api/books/author";
pub const ENDPOINT_SORTED_COUNT: &str = "/api/books/sorted-count";
pub const ENDPOINT_FORMATTED_DATES: &str = "/api/books/formatted-dates";
pub const ENDPOINT_AVERAGE_MAX_MIN: &str = "/api/books/average-max-min";
pub const ENDPOINT_AUTHOR_WORDCOUNT: &str = "/api/books/author-wordcount";
pub const ENDPOINT_WITHOUT_DATE: &str = "/api/books/without-date";
pub const ENDPOINT_MOST_RECENT: &str = "/api/books/most-recent";

pub async fn handle_filter(
    Query(params): Query<FilterParams>,
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    tracing::info!(
        "Request to filter books with minPages={} and keyword={}",
        params.min_pages,
        params.keyword
    );
    let result = engine.filter_books(params.min_pages, &params.keyword);
    if result.is_empty() {
        tracing::warn!(
            "No books found matching filter criteria: minPages={}, keyword={}",
            params.min_pages,
            params.keyword
        );
        return Err(ApiError::not_found(
            "No books found matching the filter criteria.",
        ));
    }
    Ok(Json(result))
}

pub async fn handle_author(
    Query(params): Query<AuthorParams>,
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    tracing::info!("Request to get books by author: {}", params.author_name);
    let result = engine.books_by_author(&params.author_name);
    if result.is_empty() {
        tracing::warn!("No books found for author: {}", params.author_name);
        return Err(ApiError::not_found(format!(
            "No books found for author: {}",
            params.author_name
        )));
    }
    Ok(Json(result))
}

pub async fn handle_sorted_count(
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> Result<Json<TitleCountResponse>, ApiError> {
    tracing::info!("Request to get sorted titles and books count by author");
    let response = engine.title_count_response();
    if response.titles.is_empty() {
        tracing::warn!("No books available for sorting/count");
        return Err(ApiError::not_found("No books available."));
    }
    Ok(Json(response))
}

pub async fn handle_formatted_dates(
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> Result<Json<Vec<FormattedDateResponse>>, ApiError> {
    tracing::info!("Request to get books with formatted dates");
    let result = engine.formatted_dates();
    if result.is_empty() {
        tracing::warn!("No books with formatted dates found");
        return Err(ApiError::not_found("No books with formatted dates found."));
    }
    Ok(Json(result))
}

pub async fn handle_average_max_min(
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> Json<PagesMaxMinResponse> {
    tracing::info!("Request to get average, max and min pages of books");
    Json(engine.pages_max_min_response())
}

pub async fn handle_author_wordcount(
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> Result<Json<Vec<ByAuthorResponse>>, ApiError> {
    tracing::info!("Request to get books by author with word count");
    let result = engine.by_author_response();
    if result.is_empty() {
        tracing::warn!("No books found");
        return Err(ApiError::not_found("No books found."));
    }
    Ok(Json(result))
}

pub async fn handle_without_date(
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> Json<WithoutDateResponse> {
    tracing::info!("Request to get books without publication date and check duplicated authors");
    Json(engine.without_date_response())
}

pub async fn handle_most_recent(
    Extension(engine): Extension<Arc<QueryEngine>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    tracing::info!("Request to get top most recent books");
    let result = engine.most_recent_books();
    if result.is_empty() {
        tracing::warn!("No recent books found");
        return Err(ApiError::not_found("No recent books found."));
    }
    Ok(Json(result))
}
