use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


// book serializes as null when nothing is stored under the id
#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: Option<BookDto>,
}

impl GetBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::Category;

    lazy_static! {
        static ref SVC : Arc<dyn CatalogService> = factory::create_catalog_service(&Configuration::new("test"));
        static ref ADD_CMD : AddBookCommand = AddBookCommand::new(SVC.clone());
        static ref GET_CMD : GetBookCommand = GetBookCommand::new(SVC.clone());
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let res = ADD_CMD.execute(AddBookCommandRequest::new("test book", "author", 5.0, "isbn", Category::Fiction))
            .await.expect("should add book");
        let loaded = GET_CMD.execute(GetBookCommandRequest::new(res.book.id.to_string())).await.expect("should get book");
        assert_eq!(Some(res.book), loaded.book);
    }

    #[tokio::test]
    async fn test_should_answer_null_for_missing_book() {
        let loaded = GET_CMD.execute(GetBookCommandRequest::new("missing".to_string())).await.expect("should not fail");
        assert!(loaded.book.is_none());
        let json = serde_json::to_string(&GetBookCommandResponse::new(None)).expect("should serialize");
        assert_eq!(r#"{"book":null}"#, json);
    }
}
