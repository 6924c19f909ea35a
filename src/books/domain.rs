use crate::core::domain::Identifiable;
use crate::core::library::Category;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn category(&self) -> Category;

    // matches_title is a case-insensitive substring test; an empty needle matches every book.
    fn matches_title(&self, needle: &str) -> bool {
        self.title().to_lowercase().contains(needle.to_lowercase().as_str())
    }
}
