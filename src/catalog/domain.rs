pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookPatch;
use crate::books::dto::BookDto;
use crate::core::library::{Category, LibraryResult};

// CatalogService is the use-case boundary over the book registry. Lookups that miss
// answer Ok(None) rather than an error.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: &str) -> LibraryResult<bool>;
    async fn update_book(&self, id: &str, patch: &BookPatch) -> LibraryResult<Option<BookDto>>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<Option<BookDto>>;
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_category(&self, category: Category) -> LibraryResult<Vec<BookDto>>;
    async fn search_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
}
