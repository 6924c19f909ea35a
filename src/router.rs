use axum::{
    routing::get,
    Router,
};
use crate::catalog::controller::{add_book, find_book_by_id, find_books_by_category, list_books, remove_book, search_books, update_book};
use crate::core::controller::AppState;
use crate::web::controller::{console, index};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/console", get(console))
        .route("/api/books",
               get(list_books).post(add_book))
        .route("/api/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/api/categories/:category/books", get(find_books_by_category))
        .route("/api/search/books", get(search_books))
        .with_state(state)
}
