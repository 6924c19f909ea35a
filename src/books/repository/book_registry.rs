use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::books::domain::Book;
use crate::books::domain::model::{BookEntity, BookPatch};
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::Category;
use crate::core::repository::Repository;

/// BookRegistry is the in-memory owner of every book record.
///
/// Each operation is one atomic step on a sharded map. Nothing spans two
/// operations, so a `get` followed by an `update` can race with a concurrent
/// `delete`; callers that need more must coordinate themselves.
#[derive(Debug, Default)]
pub struct BookRegistry {
    books: DashMap<String, BookEntity>,
}

impl BookRegistry {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }

    // seed stores the startup catalog under its fixed ids; records already present are kept.
    pub(crate) fn seed(&self, books: Vec<BookEntity>) {
        for book in books {
            self.books.entry(book.id()).or_insert(book);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.books.len()
    }

    fn filter<P: Fn(&BookEntity) -> bool>(&self, predicate: P) -> Vec<BookEntity> {
        self.books.iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl Repository<BookEntity, BookPatch> for BookRegistry {
    // create always assigns a fresh id; whatever id the caller set is discarded.
    fn create(&self, entity: BookEntity) -> BookEntity {
        let mut book = entity;
        loop {
            book.book_id = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = self.books.entry(book.book_id.clone()) {
                slot.insert(book.clone());
                return book;
            }
        }
    }

    fn update(&self, id: &str, patch: &BookPatch) -> Option<BookEntity> {
        // the shard stays write-locked while the merged copy is swapped in
        self.books.get_mut(id).map(|mut entry| {
            let merged = entry.merge(patch);
            *entry = merged.clone();
            merged
        })
    }

    fn get(&self, id: &str) -> Option<BookEntity> {
        self.books.get(id).map(|entry| entry.value().clone())
    }

    fn delete(&self, id: &str) -> bool {
        self.books.remove(id).is_some()
    }

    fn find_all(&self) -> Vec<BookEntity> {
        self.filter(|_| true)
    }
}

impl BookRepository for BookRegistry {
    fn find_by_category(&self, category: Category) -> Vec<BookEntity> {
        self.filter(|book| book.category() == category)
    }

    fn search_by_title(&self, needle: &str) -> Vec<BookEntity> {
        self.filter(|book| book.matches_title(needle))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use crate::books::domain::model::{BookEntity, BookPatch};
    use crate::books::factory::seed_books;
    use crate::books::repository::BookRepository;
    use crate::books::repository::book_registry::BookRegistry;
    use crate::core::library::Category;
    use crate::core::repository::Repository;

    fn seeded_registry() -> BookRegistry {
        let registry = BookRegistry::new();
        registry.seed(seed_books());
        registry
    }

    fn ids(books: &[BookEntity]) -> HashSet<String> {
        books.iter().map(|b| b.book_id.clone()).collect()
    }

    #[tokio::test]
    async fn test_should_create_get_books() {
        let registry = BookRegistry::new();
        let book = registry.create(BookEntity::new("New Book", "A", 10.0, "999", Category::Technology));
        let loaded = registry.get(book.book_id.as_str()).expect("should return book");
        assert_eq!(book, loaded);
        assert_eq!("New Book", loaded.title.as_str());
        assert_eq!("A", loaded.author.as_str());
        assert_eq!(10.0, loaded.price);
        assert_eq!("999", loaded.isbn.as_str());
        assert_eq!(Category::Technology, loaded.category);
    }

    #[tokio::test]
    async fn test_should_assign_id_on_create() {
        let registry = seeded_registry();
        let book = registry.create(BookEntity::with_id("caller-picked", "Picked", "A", 1.0, "1", Category::Fiction));
        assert_ne!("caller-picked", book.book_id.as_str());
        assert!(registry.get("caller-picked").is_none());
        assert_eq!(book, registry.get(book.book_id.as_str()).expect("should return book"));

        let book = registry.create(BookEntity::with_id("1", "Clash", "A", 1.0, "1", Category::Fiction));
        assert_ne!("1", book.book_id.as_str());
        assert_eq!("Java Programming", registry.get("1").expect("seed book").title.as_str());

        let book = registry.create(BookEntity::new("Blank", "A", 1.0, "1", Category::Fiction));
        assert!(!book.book_id.is_empty());
        assert_eq!(6, registry.len());
    }

    #[tokio::test]
    async fn test_should_not_overwrite_on_second_seed() {
        let registry = seeded_registry();
        let patch = BookPatch { title: Some("Edited".to_string()), ..Default::default() };
        let _ = registry.update("1", &patch);
        assert!(registry.delete("2"));
        registry.seed(seed_books());
        assert_eq!("Edited", registry.get("1").expect("seed book").title.as_str());
        assert_eq!("Science Fiction", registry.get("2").expect("seed book").title.as_str());
        assert_eq!(3, registry.len());
    }

    #[tokio::test]
    async fn test_should_return_none_for_unknown_id() {
        let registry = seeded_registry();
        assert!(registry.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_should_delete_once() {
        let registry = seeded_registry();
        assert!(registry.delete("1"));
        assert!(registry.get("1").is_none());
        assert!(!registry.delete("1"));
        assert_eq!(2, registry.len());
    }

    #[tokio::test]
    async fn test_should_update_supplied_fields() {
        let registry = seeded_registry();
        let patch = BookPatch { title: Some("".to_string()), category: Some(Category::Science), ..Default::default() };
        let updated = registry.update("2", &patch).expect("should update book");
        assert_eq!("", updated.title.as_str());
        assert_eq!(Category::Science, updated.category);
        assert_eq!("Jane Smith", updated.author.as_str());
        assert_eq!(updated, registry.get("2").expect("should return book"));
    }

    #[tokio::test]
    async fn test_should_not_change_book_for_empty_patch() {
        let registry = seeded_registry();
        let before = registry.get("3").expect("should return book");
        let after = registry.update("3", &BookPatch::default()).expect("should update book");
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_should_not_update_unknown_id() {
        let registry = seeded_registry();
        let patch = BookPatch { title: Some("x".to_string()), ..Default::default() };
        assert!(registry.update("missing", &patch).is_none());
        assert_eq!(3, registry.find_all().len());
        assert!(registry.get("missing").is_none());
    }

    #[tokio::test]
    async fn test_should_filter_seed_catalog() {
        let registry = seeded_registry();
        let fiction = registry.find_by_category(Category::Fiction);
        assert_eq!(1, fiction.len());
        assert_eq!("Science Fiction", fiction[0].title.as_str());

        let world = registry.search_by_title("world");
        assert_eq!(1, world.len());
        assert_eq!("World History", world[0].title.as_str());

        let _ = registry.create(BookEntity::new("New Book", "A", 10.0, "999", Category::Technology));
        assert_eq!(4, registry.find_all().len());
    }

    #[tokio::test]
    async fn test_should_match_everything_for_empty_needle() {
        let registry = seeded_registry();
        assert_eq!(ids(&registry.find_all()), ids(&registry.search_by_title("")));
        assert!(registry.search_by_title("no such title").is_empty());
        assert_eq!(1, registry.search_by_title("JAVA").len());
    }

    #[tokio::test]
    async fn test_should_partition_by_category() {
        let registry = seeded_registry();
        let _ = registry.create(BookEntity::new("Cosmos", "Carl Sagan", 15.0, "555", Category::Science));
        let _ = registry.create(BookEntity::new("Dune", "Frank Herbert", 12.0, "777", Category::Fiction));
        let all = registry.find_all();
        let mut union = HashSet::new();
        for category in Category::ALL {
            let matches = registry.find_by_category(category);
            assert!(matches.iter().all(|b| b.category == category));
            let expected: HashSet<String> = all.iter()
                .filter(|b| b.category == category)
                .map(|b| b.book_id.clone()).collect();
            assert_eq!(expected, ids(&matches));
            union.extend(ids(&matches));
        }
        assert_eq!(ids(&all), union);
    }

    #[tokio::test]
    async fn test_should_return_detached_snapshot() {
        let registry = seeded_registry();
        let mut snapshot = registry.find_all();
        snapshot[0].title = "changed".to_string();
        snapshot.clear();
        assert_eq!(3, registry.find_all().len());
        assert!(registry.find_all().iter().all(|b| b.title != "changed"));
    }

    #[tokio::test]
    async fn test_should_create_concurrently_with_unique_ids() {
        let registry = Arc::new(BookRegistry::new());
        let handles: Vec<_> = (0..8).map(|t| {
            let registry = registry.clone();
            thread::spawn(move || {
                (0..100).map(|i| {
                    registry.create(BookEntity::new(format!("book {} {}", t, i).as_str(), "A", 1.0, "isbn", Category::History)).book_id
                }).collect::<Vec<_>>()
            })
        }).collect();
        let mut all_ids = HashSet::new();
        for handle in handles {
            all_ids.extend(handle.join().expect("writer should finish"));
        }
        assert_eq!(800, all_ids.len());
        assert_eq!(800, registry.len());
    }

    #[tokio::test]
    async fn test_should_never_expose_partial_updates() {
        let registry = Arc::new(seeded_registry());
        let writers: Vec<_> = [("A", 1.0), ("B", 2.0)].into_iter().map(|(title, price)| {
            let registry = registry.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let patch = BookPatch { title: Some(title.to_string()), price: Some(price), ..Default::default() };
                    let _ = registry.update("1", &patch);
                }
            })
        }).collect();
        let reader = {
            let registry = registry.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    let book = registry.get("1").expect("book should stay");
                    match book.title.as_str() {
                        "A" => assert_eq!(1.0, book.price),
                        "B" => assert_eq!(2.0, book.price),
                        _ => assert_eq!(49.99, book.price),
                    }
                }
            })
        };
        for writer in writers {
            writer.join().expect("writer should finish");
        }
        reader.join().expect("reader should finish");
    }
}
