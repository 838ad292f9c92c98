use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Book is an immutable catalog record. No field is validated, empty strings are
// valid values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub author: String,
}

impl Book {
    pub fn new(id: &str, name: &str, author: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            author: author.to_string(),
        }
    }

    // label used when several selected books share the same name
    pub fn qualified_name(&self) -> String {
        format!("{} - {}", self.author, self.name)
    }
}

impl Identifiable for Book {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
