pub mod memory_book_repository;

use crate::books::domain::model::Book;
use crate::core::library::MatchPolicy;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<Book> {
    // all books whose name contains the search string, in no particular order
    fn find_by_name(&self, search: &str, policy: MatchPolicy) -> Vec<Book>;

    // all books whose author contains the search string, in no particular order
    fn find_by_author(&self, search: &str, policy: MatchPolicy) -> Vec<Book>;
}
