use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::{BookEntity, BookPatch};
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{Category, LibraryError, LibraryResult};
use crate::core::repository::Repository;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }
}

// Prices carry no range rule, but NaN and infinities cannot be stored meaningfully.
fn validate_price(price: f64) -> LibraryResult<()> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(LibraryError::validation(
            format!("price must be a finite number but was {}", price).as_str(), Some("price".to_string())))
    }
}

fn to_dtos(books: Vec<BookEntity>) -> Vec<BookDto> {
    books.iter().map(BookDto::from).collect()
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        validate_price(book.price)?;
        let stored = self.book_repository.create(BookEntity::from(book));
        info!(branch = %self.branch_id, book_id = %stored.book_id, "added book");
        Ok(BookDto::from(&stored))
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<bool> {
        let removed = self.book_repository.delete(id);
        info!(branch = %self.branch_id, book_id = id, removed, "removed book");
        Ok(removed)
    }

    async fn update_book(&self, id: &str, patch: &BookPatch) -> LibraryResult<Option<BookDto>> {
        if patch.is_empty() {
            debug!(book_id = id, "empty update");
            return Ok(self.book_repository.get(id).as_ref().map(BookDto::from));
        }
        if let Some(price) = patch.price {
            validate_price(price)?;
        }
        let updated = self.book_repository.update(id, patch);
        info!(branch = %self.branch_id, book_id = id, found = updated.is_some(), "updated book");
        Ok(updated.as_ref().map(BookDto::from))
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<Option<BookDto>> {
        debug!(book_id = id, "find book");
        Ok(self.book_repository.get(id).as_ref().map(BookDto::from))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(to_dtos(self.book_repository.find_all()))
    }

    async fn find_books_by_category(&self, category: Category) -> LibraryResult<Vec<BookDto>> {
        debug!(%category, "find books by category");
        Ok(to_dtos(self.book_repository.find_by_category(category)))
    }

    async fn search_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        debug!(title, "search books");
        Ok(to_dtos(self.book_repository.search_by_title(title)))
    }
}
