use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::Category;

// BookEntity is a catalogued title. Every stored entity is immutable once it is in the
// registry; updates swap in a merged copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub isbn: String,
    pub category: Category,
}

impl BookEntity {
    // new leaves the id blank; the registry assigns one when the book is stored.
    pub fn new(title: &str, author: &str, price: f64, isbn: &str, category: Category) -> Self {
        Self::with_id("", title, author, price, isbn, category)
    }

    pub fn with_id(book_id: &str, title: &str, author: &str, price: f64, isbn: &str, category: Category) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            price,
            isbn: isbn.to_string(),
            category,
        }
    }

    // merge builds the updated copy; the id is never part of a patch.
    pub fn merge(&self, patch: &BookPatch) -> Self {
        Self {
            book_id: self.book_id.clone(),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            author: patch.author.clone().unwrap_or_else(|| self.author.clone()),
            price: patch.price.unwrap_or(self.price),
            isbn: patch.isbn.clone().unwrap_or_else(|| self.isbn.clone()),
            category: patch.category.unwrap_or(self.category),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn category(&self) -> Category {
        self.category
    }
}

/// Partial update of a book. `None` leaves a field alone while `Some("")`
/// overwrites it with the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<f64>,
    pub isbn: Option<String>,
    pub category: Option<Category>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.price.is_none()
            && self.isbn.is_none() && self.category.is_none()
    }
}
