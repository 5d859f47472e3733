pub mod get_all_books_cmd;
pub mod get_book_by_author_cmd;
pub mod get_book_by_name_cmd;
