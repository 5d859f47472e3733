pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookRecord;
use crate::core::context::RequestContext;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait LookupService: Sync + Send {
    async fn get_book_by_name(&self, ctx: &RequestContext, book_name: &str) -> LibraryResult<BookRecord>;
    async fn get_book_by_author(&self, ctx: &RequestContext, author_name: &str) -> LibraryResult<BookRecord>;
    async fn get_all_books(&self, ctx: &RequestContext) -> LibraryResult<Vec<BookRecord>>;
}
