use std::collections::{HashMap, HashSet};
use tracing::debug;
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryResult, MatchPolicy};

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    result_cap: usize,
    match_policy: MatchPolicy,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
            result_cap: config.result_cap,
            match_policy: config.match_policy,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_new_book(&self, book: Book) -> bool {
        let id = book.id.clone();
        match self.book_repository.create(book) {
            Ok(_) => {
                debug!(book_id = id.as_str(), "added book");
                true
            }
            Err(err) => {
                debug!(book_id = id.as_str(), error = %err, "rejected book");
                false
            }
        }
    }

    fn delete_book(&self, id: &str) -> bool {
        match self.book_repository.delete(id) {
            Ok(_) => {
                debug!(book_id = id, "deleted book");
                true
            }
            Err(err) => {
                debug!(book_id = id, error = %err, "nothing to delete");
                false
            }
        }
    }

    fn list_books_by_name(&self, search: &str) -> HashSet<String> {
        let books: Vec<Book> = self.book_repository.find_by_name(search, self.match_policy)
            .into_iter()
            .take(self.result_cap)
            .collect();

        // name collisions are counted among the capped selection only
        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for book in &books {
            *occurrences.entry(book.name.as_str()).or_default() += 1;
        }

        let res: HashSet<String> = books.iter().map(|book| {
            if occurrences.get(book.name.as_str()).copied().unwrap_or_default() > 1 {
                book.qualified_name()
            } else {
                book.name.clone()
            }
        }).collect();
        debug!(search, matches = books.len(), labels = res.len(), "listed books by name");
        res
    }

    fn list_books_by_author(&self, search: &str) -> Vec<String> {
        let mut books = self.book_repository.find_by_author(search, self.match_policy);
        // stable, author is the only key
        books.sort_by(|a, b| a.author.cmp(&b.author));
        let res: Vec<String> = books.into_iter()
            .take(self.result_cap)
            .map(|book| book.name)
            .collect();
        debug!(search, matches = res.len(), "listed books by author");
        res
    }

    fn find_book(&self, id: &str) -> LibraryResult<Book> {
        self.book_repository.get(id)
    }

    fn count_books(&self) -> usize {
        self.book_repository.count()
    }
}
