use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub deleted: bool,
}

impl RemoveBookCommandResponse {
    pub fn new(deleted: bool) -> Self {
        Self {
            deleted,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id.as_str()).await
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::Category;

    lazy_static! {
        static ref SVC : Arc<dyn CatalogService> = factory::create_catalog_service(&Configuration::new("test"));
        static ref ADD_CMD : AddBookCommand = AddBookCommand::new(SVC.clone());
        static ref REMOVE_CMD : RemoveBookCommand = RemoveBookCommand::new(SVC.clone());
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let added = ADD_CMD.execute(AddBookCommandRequest::new("test book", "author", 1.0, "isbn", Category::Technology))
            .await.expect("should add book");
        let res = REMOVE_CMD.execute(RemoveBookCommandRequest::new(added.book.id.to_string())).await.expect("should remove book");
        assert!(res.deleted);
        let res = REMOVE_CMD.execute(RemoveBookCommandRequest::new(added.book.id.to_string())).await.expect("should not fail");
        assert!(!res.deleted);
    }
}
