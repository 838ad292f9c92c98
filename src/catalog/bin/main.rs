include!("../../lib.rs");
use std::sync::Arc;
use tracing::info;
use crate::books::domain::model::Book;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_by_author_cmd::{ListBooksByAuthorCommand, ListBooksByAuthorCommandRequest};
use crate::catalog::command::list_by_name_cmd::{ListBooksByNameCommand, ListBooksByNameCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::utils::logs::setup_tracing;

// Usage: catalog [books.json] [search] [book_id...]
// Without a books file the catalog is seeded with a small sample. Listed book
// ids are removed before the catalog is searched.

fn sample_books() -> Vec<Book> {
    vec![
        Book::new("4", "Name1", "Lex3"),
        Book::new("3", "Name3", "Lex2"),
        Book::new("2", "Name2", "Lex2"),
        Book::new("1", "Name1", "Lex1"),
    ]
}

fn load_books(path: Option<&String>) -> LibraryResult<Vec<Book>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(sample_books()),
    }
}

// seed adds every book and returns how many were accepted; later books with a
// taken id are skipped.
async fn seed(svc: &Arc<dyn CatalogService>, books: Vec<Book>) -> Result<usize, CommandError> {
    let add_cmd = AddBookCommand::new(svc.clone());
    let get_cmd = GetBookCommand::new(svc.clone());
    let mut added = 0;
    for book in books {
        let id = book.id.clone();
        let res = add_cmd.execute(AddBookCommandRequest::from(book)).await?;
        if res.added {
            added += 1;
        } else {
            let kept = get_cmd.execute(GetBookCommandRequest::new(id.clone())).await?;
            info!(book_id = id.as_str(), kept = kept.book.name.as_str(), "skipped duplicate book");
        }
    }
    Ok(added)
}

async fn remove(svc: &Arc<dyn CatalogService>, ids: &[String]) -> Result<(), CommandError> {
    let cmd = RemoveBookCommand::new(svc.clone());
    for id in ids {
        let res = cmd.execute(RemoveBookCommandRequest::new(id.clone())).await?;
        info!(book_id = id.as_str(), removed = res.removed, "remove book");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Configuration::from_env()?;
    info!(branch = config.branch_id.as_str(), result_cap = config.result_cap,
        match_policy = %config.match_policy, "starting catalog");

    let svc = create_catalog_service(&config);
    let added = seed(&svc, load_books(args.first())?).await?;
    info!(added, books = svc.count_books(), "catalog seeded");
    if args.len() > 2 {
        remove(&svc, &args[2..]).await?;
    }

    let search = args.get(1).map(String::as_str).unwrap_or("");
    let by_name = ListBooksByNameCommand::new(svc.clone())
        .execute(ListBooksByNameCommandRequest::new(search)).await?;
    let by_author = ListBooksByAuthorCommand::new(svc.clone())
        .execute(ListBooksByAuthorCommandRequest::new(search)).await?;

    println!("{}", serde_json::to_string(&by_name)?);
    println!("{}", serde_json::to_string(&by_author)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use uuid::Uuid;
    use crate::books::domain::model::Book;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::{load_books, remove, seed};

    fn write_temp(contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", Uuid::new_v4()));
        std::fs::write(&path, contents).expect("should write books file");
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_should_load_sample_books() {
        let books = load_books(None).expect("should load sample");
        assert_eq!(4, books.len());
        assert!(books.contains(&Book::new("1", "Name1", "Lex1")));
    }

    #[test]
    fn test_should_load_books_file() {
        let path = write_temp(r#"[{"id":"1","name":"A","author":"X"},{"id":"2","name":"B","author":"Y"}]"#);
        let books = load_books(Some(&path)).expect("should load books file");
        let _ = std::fs::remove_file(&path);
        assert_eq!(vec![Book::new("1", "A", "X"), Book::new("2", "B", "Y")], books);
    }

    #[test]
    fn test_should_fail_malformed_books_file() {
        let path = write_temp(r#"[{"id":"1","name":"A"}"#);
        let res = load_books(Some(&path));
        let _ = std::fs::remove_file(&path);
        assert!(matches!(res, Err(LibraryError::Serialization{ .. })));
    }

    #[test]
    fn test_should_fail_missing_books_file() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", Uuid::new_v4()))
            .to_string_lossy().to_string();
        assert!(matches!(load_books(Some(&path)), Err(LibraryError::Runtime{ .. })));
    }

    #[tokio::test]
    async fn test_should_seed_and_skip_duplicates() {
        let svc: Arc<dyn CatalogService> = create_catalog_service(&Configuration::new("test"));
        let books = vec![Book::new("1", "A", "X"), Book::new("1", "B", "Y"), Book::new("2", "C", "Z")];
        let added = seed(&svc, books).await.expect("should seed catalog");
        assert_eq!(2, added);
        assert_eq!(2, svc.count_books());
        assert_eq!("A", svc.find_book("1").expect("should return book").name.as_str());

        remove(&svc, &["2".to_string(), "9".to_string()]).await.expect("should remove books");
        assert_eq!(1, svc.count_books());
    }
}
