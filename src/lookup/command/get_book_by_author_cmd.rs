use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::context::RequestContext;
use crate::lookup::domain::LookupService;

pub struct GetBookByAuthorCommand {
    lookup_service: Arc<dyn LookupService>,
}

impl GetBookByAuthorCommand {
    pub fn new(lookup_service: Arc<dyn LookupService>) -> Self {
        Self {
            lookup_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookByAuthorCommandRequest {
    pub author: String,
}

impl GetBookByAuthorCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookByAuthorCommandResponse {
    pub book: BookDto,
}

#[async_trait]
impl Command<GetBookByAuthorCommandRequest, GetBookByAuthorCommandResponse> for GetBookByAuthorCommand {
    async fn execute(&self, ctx: &RequestContext, req: GetBookByAuthorCommandRequest) -> Result<GetBookByAuthorCommandResponse, CommandError> {
        self.lookup_service.get_book_by_author(ctx, req.author.as_str())
            .await.map_err(CommandError::from).map(|b| GetBookByAuthorCommandResponse { book: BookDto::from(&b) })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::context::RequestContext;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::lookup::command::get_book_by_author_cmd::{GetBookByAuthorCommand, GetBookByAuthorCommandRequest};
    use crate::lookup::factory;

    async fn build_command() -> GetBookByAuthorCommand {
        let svc = factory::create_lookup_service(&Configuration::new("test", RepositoryStore::InMemory)).await
            .expect("should build service");
        GetBookByAuthorCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_get_book_by_author() {
        let cmd = build_command().await;
        let res = cmd.execute(&RequestContext::new(), GetBookByAuthorCommandRequest::new("Charles Dickens")).await
            .expect("should get book");
        assert_eq!("Great Expectations", res.book.name.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_unsupported_author() {
        let cmd = build_command().await;
        // in the catalog but not in the allow-list
        let res = cmd.execute(&RequestContext::new(), GetBookByAuthorCommandRequest::new("George Eliot")).await;
        assert!(matches!(res, Err(CommandError::Access{ .. })));
    }
}
