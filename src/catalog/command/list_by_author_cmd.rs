use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksByAuthorCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksByAuthorCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBooksByAuthorCommandRequest {
    #[serde(default)]
    pub(crate) search: String,
}

impl ListBooksByAuthorCommandRequest {
    pub(crate) fn new(search: &str) -> Self {
        Self {
            search: search.to_string(),
        }
    }
}


// names are ordered by author
#[derive(Debug, Serialize)]
pub(crate) struct ListBooksByAuthorCommandResponse {
    pub(crate) names: Vec<String>,
}

impl ListBooksByAuthorCommandResponse {
    pub(crate) fn new(names: Vec<String>) -> Self {
        Self {
            names,
        }
    }
}

#[async_trait]
impl Command<ListBooksByAuthorCommandRequest, ListBooksByAuthorCommandResponse> for ListBooksByAuthorCommand {
    async fn execute(&self, req: ListBooksByAuthorCommandRequest) -> Result<ListBooksByAuthorCommandResponse, CommandError> {
        Ok(ListBooksByAuthorCommandResponse::new(self.catalog_service.list_books_by_author(req.search.as_str())))
    }
}
