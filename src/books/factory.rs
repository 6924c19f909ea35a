use std::sync::Arc;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::book_registry::BookRegistry;
use crate::core::domain::Configuration;
use crate::core::library::Category;

pub fn create_book_repository(config: &Configuration) -> Arc<dyn BookRepository> {
    let registry = BookRegistry::new();
    if config.seed_catalog {
        registry.seed(seed_books());
        info!("seeded catalog for branch {} with {} books", config.branch_id, registry.len());
    }
    Arc::new(registry)
}

pub(crate) fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::with_id("1", "Java Programming", "John Doe", 49.99, "1234560", Category::Technology),
        BookEntity::with_id("2", "Science Fiction", "Jane Smith", 29.99, "0987321", Category::Fiction),
        BookEntity::with_id("3", "World History", "Bob Johnson", 39.99, "1122455", Category::History),
    ]
}
