use std::collections::HashSet;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookRecord;
use crate::books::repository::BookStore;
use crate::core::context::RequestContext;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::logger::{Field, Logger};
use crate::lookup::domain::LookupService;

// upper bound on a plausible catalog size, larger results are reported but still returned
pub const MAX_PLAUSIBLE_BOOKS: usize = 50_544_252;

pub struct LookupServiceImpl {
    book_store: Arc<dyn BookStore>,
    supported_authors: HashSet<String>,
    logger: Arc<dyn Logger>,
}

impl LookupServiceImpl {
    /// Builds the service from a store, the author allow-list and a logger.
    ///
    /// Author names are lower-cased when the allow-list is built. Fails with
    /// `LibraryError::Config` when the store or logger is missing or the
    /// allow-list is empty. The store is not touched.
    pub fn new<I, S>(book_store: Option<Arc<dyn BookStore>>,
                     supported_authors: I,
                     logger: Option<Arc<dyn Logger>>) -> LibraryResult<Self>
        where I: IntoIterator<Item=S>, S: AsRef<str> {
        let book_store = book_store.ok_or_else(|| LibraryError::config("book store cannot be absent"))?;
        let supported_authors: HashSet<String> = supported_authors.into_iter()
            .map(|a| a.as_ref().to_lowercase())
            .collect();
        if supported_authors.is_empty() {
            return Err(LibraryError::config("supported authors cannot be empty"));
        }
        let logger = logger.ok_or_else(|| LibraryError::config("logger cannot be absent"))?;
        Ok(Self {
            book_store,
            supported_authors,
            logger,
        })
    }

    pub fn is_supported_author(&self, author_name: &str) -> bool {
        self.supported_authors.contains(author_name.to_lowercase().as_str())
    }
}

impl Debug for LookupServiceImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupServiceImpl")
            .field("supported_authors", &self.supported_authors)
            .finish_non_exhaustive()
    }
}

fn out_of_bounds(count: usize) -> bool {
    count == 0 || count > MAX_PLAUSIBLE_BOOKS
}

#[async_trait]
impl LookupService for LookupServiceImpl {
    async fn get_book_by_name(&self, ctx: &RequestContext, book_name: &str) -> LibraryResult<BookRecord> {
        if book_name.is_empty() {
            return Err(LibraryError::EmptyName);
        }
        self.book_store.get_by_name(ctx, book_name).await.map_err(LibraryError::from)
    }

    async fn get_book_by_author(&self, ctx: &RequestContext, author_name: &str) -> LibraryResult<BookRecord> {
        if author_name.is_empty() {
            return Err(LibraryError::EmptyAuthor);
        }

        let normalized = author_name.to_lowercase();
        self.logger.info(ctx, "checking for supported author with name",
                         &[Field::string("author", normalized.as_str())]);
        if !self.supported_authors.contains(normalized.as_str()) {
            return Err(LibraryError::unsupported_author(author_name));
        }

        // the store sees the caller's spelling, only the allow-list check is case-insensitive
        self.book_store.get_by_author(ctx, author_name).await.map_err(LibraryError::from)
    }

    async fn get_all_books(&self, ctx: &RequestContext) -> LibraryResult<Vec<BookRecord>> {
        let books = self.book_store.get_all(ctx).await.map_err(LibraryError::from)?;
        if out_of_bounds(books.len()) {
            self.logger.error(ctx, "book length out of bounds",
                              &[Field::int("length", books.len() as i64)]);
        }
        Ok(books)
    }
}
