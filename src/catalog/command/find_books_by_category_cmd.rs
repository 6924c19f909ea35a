use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::list_books_cmd::BooksResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::Category;

pub struct FindBooksByCategoryCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksByCategoryCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBooksByCategoryCommandRequest {
    pub category: Category,
}

impl FindBooksByCategoryCommandRequest {
    pub fn new(category: Category) -> Self {
        Self {
            category,
        }
    }
}

#[async_trait]
impl Command<FindBooksByCategoryCommandRequest, BooksResponse> for FindBooksByCategoryCommand {
    async fn execute(&self, req: FindBooksByCategoryCommandRequest) -> Result<BooksResponse, CommandError> {
        self.catalog_service.find_books_by_category(req.category)
            .await.map_err(CommandError::from).map(BooksResponse::new)
    }
}
