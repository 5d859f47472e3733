use std::sync::Arc;
use axum::http::StatusCode;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::lookup::domain::LookupService;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub lookup_service: Arc<dyn LookupService>,
}

impl AppState {
    pub fn new(config: Configuration, lookup_service: Arc<dyn LookupService>) -> AppState {
        AppState {
            config,
            lookup_service,
        }
    }
}

pub type ServerError = (StatusCode, String);

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Access { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_status_codes() {
        let (status, _) = ServerError::from(CommandError::NotFound { message: "none".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = ServerError::from(CommandError::Validation { message: "empty".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Access { message: "author".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, body) = ServerError::from(CommandError::Database { message: "down".to_string(), reason_code: None, retryable: true });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert!(body.contains("down"));
    }
}
