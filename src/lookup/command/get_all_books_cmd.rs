use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::context::RequestContext;
use crate::lookup::domain::LookupService;

pub struct GetAllBooksCommand {
    lookup_service: Arc<dyn LookupService>,
}

impl GetAllBooksCommand {
    pub fn new(lookup_service: Arc<dyn LookupService>) -> Self {
        Self {
            lookup_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetAllBooksCommandResponse {
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<(), GetAllBooksCommandResponse> for GetAllBooksCommand {
    async fn execute(&self, ctx: &RequestContext, _req: ()) -> Result<GetAllBooksCommandResponse, CommandError> {
        self.lookup_service.get_all_books(ctx)
            .await.map_err(CommandError::from)
            .map(|books| GetAllBooksCommandResponse { books: books.iter().map(BookDto::from).collect() })
    }
}
