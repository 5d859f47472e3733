use async_trait::async_trait;
use crate::books::domain::model::BookRecord;
use crate::books::repository::BookStore;
use crate::core::context::RequestContext;
use crate::core::repository::{StoreError, StoreResult};

// InMemoryBookStore serves a fixed list of records, used for local runs and tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryBookStore {
    books: Vec<BookRecord>,
}

impl InMemoryBookStore {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    fn check_cancelled(ctx: &RequestContext) -> StoreResult<()> {
        if ctx.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        Ok(())
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn get_by_name(&self, ctx: &RequestContext, name: &str) -> StoreResult<BookRecord> {
        Self::check_cancelled(ctx)?;
        self.books.iter()
            .find(|b| b.name() == name)
            .cloned()
            .ok_or(StoreError::NoRows)
    }

    async fn get_by_author(&self, ctx: &RequestContext, author_name: &str) -> StoreResult<BookRecord> {
        Self::check_cancelled(ctx)?;
        self.books.iter()
            .find(|b| b.author() == author_name)
            .cloned()
            .ok_or(StoreError::NoRows)
    }

    async fn get_all(&self, ctx: &RequestContext) -> StoreResult<Vec<BookRecord>> {
        Self::check_cancelled(ctx)?;
        Ok(self.books.clone())
    }
}
