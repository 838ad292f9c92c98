use std::collections::HashMap;
use parking_lot::RwLock;
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, MatchPolicy};
use crate::core::repository::Repository;

// InMemoryBookRepository keeps books keyed by id behind a single lock, so every
// operation observes the map in one consistent state.
#[derive(Debug, Default)]
pub(crate) struct InMemoryBookRepository {
    books: RwLock<HashMap<String, Book>>,
}

impl InMemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    fn scan<F>(&self, predicate: F) -> Vec<Book>
    where
        F: Fn(&Book) -> bool,
    {
        self.books.read().values().filter(|&b| predicate(b)).cloned().collect()
    }
}

impl Repository<Book> for InMemoryBookRepository {
    fn create(&self, entity: Book) -> LibraryResult<usize> {
        let id = entity.id();
        let mut books = self.books.write();
        if books.contains_key(&id) {
            return Err(LibraryError::duplicate_key(
                format!("book {:?} already exists", id).as_str()));
        }
        books.insert(id, entity);
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<Book> {
        self.books.read().get(id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book {:?} not found", id).as_str()))
    }

    fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.books.write().remove(id).map(|_| 1)
            .ok_or_else(|| LibraryError::not_found(format!("book {:?} not found", id).as_str()))
    }

    fn count(&self) -> usize {
        self.books.read().len()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn find_by_name(&self, search: &str, policy: MatchPolicy) -> Vec<Book> {
        self.scan(|b| policy.matches(&b.name, search))
    }

    fn find_by_author(&self, search: &str, policy: MatchPolicy) -> Vec<Book> {
        self.scan(|b| policy.matches(&b.author, search))
    }
}
