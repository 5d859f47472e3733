use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::books::domain::model::BookRecord;
use crate::books::repository::BookStore;
use crate::core::context::RequestContext;
use crate::core::repository::{StoreError, StoreResult};
use crate::utils::ddb::{parse_date_attribute, parse_string_attribute};

// DDBBookStore reads books from a DynamoDB table keyed by book_name with an
// index on author/book_name.
#[derive(Debug)]
pub struct DDBBookStore {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBBookStore {
    pub fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }

    async fn query_first(&self, ctx: &RequestContext, index_name: Option<&str>,
                         attr: &str, value: &str) -> StoreResult<BookRecord> {
        let table_name: &str = self.table_name.as_ref();
        let request = self.client
            .query()
            .table_name(table_name)
            .set_index_name(index_name.map(str::to_string))
            .limit(1)
            // strongly consistent reads are not supported on global secondary indexes
            .consistent_read(index_name.is_none())
            .key_condition_expression(format!("{} = :{}", attr, attr))
            .expression_attribute_values(format!(":{}", attr), AttributeValue::S(value.to_string()));

        let out = cancellable(ctx, async {
            request.send().await.map_err(StoreError::from)
        }).await?;
        match out.items().unwrap_or_default().first() {
            Some(map) => map_to_book(map),
            None => Err(StoreError::NoRows),
        }
    }

    async fn scan_page(&self, ctx: &RequestContext, start_key: Option<HashMap<String, AttributeValue>>)
                       -> StoreResult<(Vec<BookRecord>, Option<HashMap<String, AttributeValue>>)> {
        let table_name: &str = self.table_name.as_ref();
        let request = self.client
            .scan()
            .table_name(table_name)
            .consistent_read(false)
            .set_exclusive_start_key(start_key);
        let out = cancellable(ctx, async {
            request.send().await.map_err(StoreError::from)
        }).await?;
        let records = out.items().unwrap_or_default().iter()
            .map(map_to_book)
            .collect::<StoreResult<Vec<BookRecord>>>()?;
        Ok((records, out.last_evaluated_key().cloned()))
    }

    #[cfg(test)]
    pub(crate) async fn put_book(&self, book: &BookRecord) -> StoreResult<()> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .put_item()
            .table_name(table_name)
            .item("book_name", AttributeValue::S(book.name().to_string()))
            .item("author", AttributeValue::S(book.author().to_string()))
            .item("published", crate::utils::ddb::string_date(book.published()))
            .send()
            .await.map(|_| ()).map_err(StoreError::from)
    }
}

#[async_trait]
impl BookStore for DDBBookStore {
    async fn get_by_name(&self, ctx: &RequestContext, name: &str) -> StoreResult<BookRecord> {
        self.query_first(ctx, None, "book_name", name).await
    }

    async fn get_by_author(&self, ctx: &RequestContext, author_name: &str) -> StoreResult<BookRecord> {
        let index_name: &str = self.index_name.as_ref();
        self.query_first(ctx, Some(index_name), "author", author_name).await
    }

    async fn get_all(&self, ctx: &RequestContext) -> StoreResult<Vec<BookRecord>> {
        let mut books = vec![];
        let mut start_key = None;
        loop {
            let (mut records, next_key) = self.scan_page(ctx, start_key).await?;
            books.append(&mut records);
            match next_key {
                Some(key) => start_key = Some(key),
                None => return Ok(books),
            }
        }
    }
}

// races a store call against the request's cancellation
async fn cancellable<T, F>(ctx: &RequestContext, fut: F) -> StoreResult<T>
    where F: Future<Output=StoreResult<T>> {
    tokio::select! {
        biased;
        _ = ctx.cancelled() => Err(StoreError::Cancelled),
        res = fut => res,
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> StoreResult<BookRecord> {
    let name = parse_string_attribute("book_name", map)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| StoreError::malformed("book item without book_name"))?;
    let author = parse_string_attribute("author", map)
        .ok_or_else(|| StoreError::malformed(format!("book {} without author", name).as_str()))?;
    let published = parse_date_attribute("published", map)
        .ok_or_else(|| StoreError::malformed(format!("book {} with invalid published date", name).as_str()))?;
    Ok(BookRecord::new(name.as_str(), author.as_str(), published))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use async_once::AsyncOnce;
    use aws_sdk_dynamodb::Client;
    use aws_sdk_dynamodb::types::AttributeValue;
    use chrono::{NaiveDate, NaiveDateTime};
    use lazy_static::lazy_static;

    use crate::books::domain::model::BookRecord;
    use crate::books::repository::BookStore;
    use crate::books::repository::ddb_book_store::{DDBBookStore, map_to_book};
    use crate::core::context::RequestContext;
    use crate::core::repository::{RepositoryStore, StoreError};
    use crate::utils::ddb::{build_db_client, create_table, delete_table, string_date};

    lazy_static! {
        static ref CLIENT: AsyncOnce<Client> = AsyncOnce::new(async {
                let client = build_db_client(RepositoryStore::LocalDynamoDB).await;
                let _ = delete_table(&client, "lookup_books").await;
                let _ = create_table(&client, "lookup_books", "book_name", "author", "book_name").await;
                client
            });
    }

    fn published() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1811, 10, 30).expect("valid date")
            .and_hms_opt(0, 0, 0).expect("valid time")
    }

    #[tokio::test]
    async fn test_should_map_items() {
        let map = HashMap::from([
            ("book_name".to_string(), AttributeValue::S("Sense and Sensibility".to_string())),
            ("author".to_string(), AttributeValue::S("Jane Austen".to_string())),
            ("published".to_string(), string_date(published())),
        ]);
        let book = map_to_book(&map).expect("should map book");
        assert_eq!(BookRecord::new("Sense and Sensibility", "Jane Austen", published()), book);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_items() {
        let no_name = HashMap::from([
            ("author".to_string(), AttributeValue::S("Jane Austen".to_string())),
        ]);
        assert!(matches!(map_to_book(&no_name), Err(StoreError::Malformed{ .. })));
        let bad_date = HashMap::from([
            ("book_name".to_string(), AttributeValue::S("Emma".to_string())),
            ("author".to_string(), AttributeValue::S("Jane Austen".to_string())),
            ("published".to_string(), AttributeValue::S("someday".to_string())),
        ]);
        assert!(matches!(map_to_book(&bad_date), Err(StoreError::Malformed{ .. })));
    }

    #[tokio::test]
    #[ignore = "requires local dynamodb"]
    async fn test_should_get_books_by_name_and_author() {
        let store = DDBBookStore::new(CLIENT.get().await.clone(), "lookup_books", "lookup_books_ndx");
        let book = BookRecord::new("Mansfield Park", "Jane Austen", published());
        store.put_book(&book).await.expect("should put book");

        let ctx = RequestContext::new();
        let loaded = store.get_by_name(&ctx, "Mansfield Park").await.expect("should return book");
        assert_eq!(book, loaded);
        let loaded = store.get_by_author(&ctx, "Jane Austen").await.expect("should return book");
        assert_eq!("Jane Austen", loaded.author());
    }

    #[tokio::test]
    #[ignore = "requires local dynamodb"]
    async fn test_should_report_no_rows() {
        let store = DDBBookStore::new(CLIENT.get().await.clone(), "lookup_books", "lookup_books_ndx");
        let ctx = RequestContext::new();
        assert!(matches!(store.get_by_name(&ctx, "missing").await, Err(StoreError::NoRows)));
        assert!(matches!(store.get_by_author(&ctx, "nobody").await, Err(StoreError::NoRows)));
    }

    #[tokio::test]
    #[ignore = "requires local dynamodb"]
    async fn test_should_scan_all_books() {
        let store = DDBBookStore::new(CLIENT.get().await.clone(), "lookup_books", "lookup_books_ndx");
        for i in 0..25 {
            let book = BookRecord::new(format!("volume_{}", i).as_str(), "Anthony Trollope", published());
            store.put_book(&book).await.expect("should put book");
        }
        let all = store.get_all(&RequestContext::new()).await.expect("should return books");
        assert!(all.len() >= 25);
    }

    #[tokio::test]
    #[ignore = "requires local dynamodb"]
    async fn test_should_stop_on_cancelled_request() {
        let store = DDBBookStore::new(CLIENT.get().await.clone(), "lookup_books", "lookup_books_ndx");
        let ctx = RequestContext::new();
        ctx.cancel();
        assert!(matches!(store.get_all(&ctx).await, Err(StoreError::Cancelled)));
    }
}
