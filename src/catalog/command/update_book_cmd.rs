use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookPatch;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::Category;

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Absent or null fields are left untouched; book_id comes from the route, not the body.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(default)]
    pub book_id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<f64>,
    pub isbn: Option<String>,
    pub category: Option<Category>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            ..Default::default()
        }
    }
    pub fn build_patch(&self) -> BookPatch {
        BookPatch {
            title: self.title.clone(),
            author: self.author.clone(),
            price: self.price,
            isbn: self.isbn.clone(),
            category: self.category,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: Option<BookDto>,
}

impl UpdateBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let patch = req.build_patch();
        self.catalog_service.update_book(req.book_id.as_str(), &patch)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
