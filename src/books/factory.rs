use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::InMemoryBookRepository;

pub(crate) fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(InMemoryBookRepository::new())
}
