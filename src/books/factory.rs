use std::sync::Arc;
use chrono::NaiveDate;
use crate::books::domain::model::BookRecord;
use crate::books::repository::BookStore;
use crate::books::repository::ddb_book_store::DDBBookStore;
use crate::books::repository::memory_book_store::InMemoryBookStore;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, create_table};

pub const BOOKS_TABLE: &str = "books";
pub const BOOKS_INDEX: &str = "books_ndx";

pub async fn create_book_store(store: RepositoryStore) -> Arc<dyn BookStore> {
    match store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(store).await;
            Arc::new(DDBBookStore::new(client, BOOKS_TABLE, BOOKS_INDEX))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(store).await;
            let _ = create_table(&client, BOOKS_TABLE, "book_name", "author", "book_name").await;
            Arc::new(DDBBookStore::new(client, BOOKS_TABLE, BOOKS_INDEX))
        }
        RepositoryStore::InMemory => {
            Arc::new(InMemoryBookStore::new(sample_catalog()))
        }
    }
}

// small fixed catalog served by the in-memory store
pub fn sample_catalog() -> Vec<BookRecord> {
    [
        ("Pride and Prejudice", "Jane Austen", (1813, 1, 28)),
        ("Emma", "Jane Austen", (1815, 12, 23)),
        ("Great Expectations", "Charles Dickens", (1861, 8, 1)),
        ("Adventures of Huckleberry Finn", "Mark Twain", (1884, 12, 10)),
        ("Middlemarch", "George Eliot", (1871, 12, 1)),
    ].iter()
        .filter_map(|(name, author, (y, m, d))| {
            NaiveDate::from_ymd_opt(*y, *m, *d)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|published| BookRecord::new(name, author, published))
        })
        .collect()
}
