use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) author: String,
}

impl AddBookCommandRequest {
    pub(crate) fn new(id: &str, name: &str, author: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            author: author.to_string(),
        }
    }

    pub(crate) fn build_book(self) -> Book {
        Book {
            id: self.id,
            name: self.name,
            author: self.author,
        }
    }
}

impl From<Book> for AddBookCommandRequest {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author: book.author,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub(crate) added: bool,
}

impl AddBookCommandResponse {
    pub(crate) fn new(added: bool) -> Self {
        Self {
            added,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let added = self.catalog_service.add_new_book(req.build_book());
        Ok(AddBookCommandResponse::new(added))
    }
}
