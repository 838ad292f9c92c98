pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod list_by_author_cmd;
pub mod list_by_name_cmd;
pub mod remove_book_cmd;
