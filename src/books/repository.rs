pub mod book_registry;

use crate::books::domain::model::{BookEntity, BookPatch};
use crate::core::library::Category;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity, BookPatch> {
    fn find_by_category(&self, category: Category) -> Vec<BookEntity>;

    fn search_by_title(&self, needle: &str) -> Vec<BookEntity>;
}
