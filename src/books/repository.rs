pub mod ddb_book_store;
pub mod memory_book_store;

use async_trait::async_trait;
use crate::books::domain::model::BookRecord;
use crate::core::context::RequestContext;
use crate::core::repository::StoreResult;

// BookStore is the read capability the lookup service consumes. Implementations must
// report a lookup without matches as StoreError::NoRows.
#[async_trait]
pub trait BookStore: Sync + Send {
    // first book with exactly this name
    async fn get_by_name(&self, ctx: &RequestContext, name: &str) -> StoreResult<BookRecord>;

    // first book written by this author, matched as given
    async fn get_by_author(&self, ctx: &RequestContext, author_name: &str) -> StoreResult<BookRecord>;

    // every book in the catalog, possibly none
    async fn get_all(&self, ctx: &RequestContext) -> StoreResult<Vec<BookRecord>>;
}
