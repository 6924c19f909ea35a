use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::list_books_cmd::BooksResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// a missing title searches with the empty string and so returns every book
#[derive(Debug, Default, Deserialize)]
pub struct SearchBooksCommandRequest {
    #[serde(default)]
    pub title: String,
}

impl SearchBooksCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, BooksResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<BooksResponse, CommandError> {
        self.catalog_service.search_books_by_title(req.title.as_str())
            .await.map_err(CommandError::from).map(BooksResponse::new)
    }
}
