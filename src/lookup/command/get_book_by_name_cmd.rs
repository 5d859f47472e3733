use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::context::RequestContext;
use crate::lookup::domain::LookupService;

pub struct GetBookByNameCommand {
    lookup_service: Arc<dyn LookupService>,
}

impl GetBookByNameCommand {
    pub fn new(lookup_service: Arc<dyn LookupService>) -> Self {
        Self {
            lookup_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookByNameCommandRequest {
    pub name: String,
}

impl GetBookByNameCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookByNameCommandResponse {
    pub book: BookDto,
}

#[async_trait]
impl Command<GetBookByNameCommandRequest, GetBookByNameCommandResponse> for GetBookByNameCommand {
    async fn execute(&self, ctx: &RequestContext, req: GetBookByNameCommandRequest) -> Result<GetBookByNameCommandResponse, CommandError> {
        self.lookup_service.get_book_by_name(ctx, req.name.as_str())
            .await.map_err(CommandError::from).map(|b| GetBookByNameCommandResponse { book: BookDto::from(&b) })
    }
}
