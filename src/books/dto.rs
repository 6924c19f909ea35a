use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::Category;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub isbn: String,
    pub category: Category,
}

impl BookDto {
    // new describes a book not stored yet, so its id stays blank.
    pub fn new(title: &str, author: &str, price: f64, isbn: &str, category: Category) -> BookDto {
        BookDto::from(&BookEntity::new(title, author, price, isbn, category))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            price: other.price,
            isbn: other.isbn.to_string(),
            category: other.category,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            price: other.price,
            isbn: other.isbn.to_string(),
            category: other.category,
        }
    }
}
