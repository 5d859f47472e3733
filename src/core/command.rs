use async_trait::async_trait;
use crate::core::context::RequestContext;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Access {
        message: String,
        reason_code: Option<String>,
    },
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, ctx: &RequestContext, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let message = other.to_string();
        match other {
            LibraryError::Config { .. } => {
                CommandError::Runtime { message, reason_code: None, retryable: false }
            }
            LibraryError::EmptyName => {
                CommandError::Validation { message, reason_code: Some("EmptyName".to_string()) }
            }
            LibraryError::EmptyAuthor => {
                CommandError::Validation { message, reason_code: Some("EmptyAuthor".to_string()) }
            }
            LibraryError::UnsupportedAuthor { .. } => {
                CommandError::Access { message, reason_code: Some("UnsupportedAuthor".to_string()) }
            }
            LibraryError::NoBooksFound => {
                CommandError::NotFound { message }
            }
            LibraryError::DataAccess { ref source, .. } => {
                CommandError::Database { message, reason_code: None, retryable: source.retryable() }
            }
        }
    }
}
