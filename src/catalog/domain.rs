pub mod service;

use std::collections::HashSet;
use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;

// CatalogService is the whole surface of the catalog. Every operation is total:
// rejected mutations report false and empty searches return empty collections.
pub trait CatalogService: Sync + Send {
    fn add_new_book(&self, book: Book) -> bool;
    fn delete_book(&self, id: &str) -> bool;
    fn list_books_by_name(&self, search: &str) -> HashSet<String>;
    fn list_books_by_author(&self, search: &str) -> Vec<String>;
    fn find_book(&self, id: &str) -> LibraryResult<Book>;
    fn count_books(&self) -> usize;
}
