use std::collections::HashSet;
use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksByNameCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksByNameCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListBooksByNameCommandRequest {
    #[serde(default)]
    pub(crate) search: String,
}

impl ListBooksByNameCommandRequest {
    pub(crate) fn new(search: &str) -> Self {
        Self {
            search: search.to_string(),
        }
    }
}


// names carries no ordering
#[derive(Debug, Serialize)]
pub(crate) struct ListBooksByNameCommandResponse {
    pub(crate) names: HashSet<String>,
}

impl ListBooksByNameCommandResponse {
    pub(crate) fn new(names: HashSet<String>) -> Self {
        Self {
            names,
        }
    }
}

#[async_trait]
impl Command<ListBooksByNameCommandRequest, ListBooksByNameCommandResponse> for ListBooksByNameCommand {
    async fn execute(&self, req: ListBooksByNameCommandRequest) -> Result<ListBooksByNameCommandResponse, CommandError> {
        Ok(ListBooksByNameCommandResponse::new(self.catalog_service.list_books_by_name(req.search.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use uuid::Uuid;
    use crate::books::domain::model::Book;
    use crate::catalog::command::list_by_name_cmd::{ListBooksByNameCommand, ListBooksByNameCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_list_books_by_name() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let marker = Uuid::new_v4().to_string();
        let name = format!("Book {}", marker);
        assert!(svc.add_new_book(Book::new("1", name.as_str(), "First")));
        assert!(svc.add_new_book(Book::new("2", name.as_str(), "Second")));
        assert!(svc.add_new_book(Book::new("3", "Unrelated", "Third")));

        let cmd = ListBooksByNameCommand::new(svc);
        let res = cmd.execute(ListBooksByNameCommandRequest::new(marker.as_str())).await.expect("should list books");
        let expected: HashSet<String> = HashSet::from([format!("First - {}", name), format!("Second - {}", name)]);
        assert_eq!(expected, res.names);
    }

    #[test]
    fn test_should_default_search_to_empty() {
        let req: ListBooksByNameCommandRequest = serde_json::from_str("{}").expect("should parse request");
        assert_eq!("", req.search.as_str());
    }
}
