use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// StoreError is what a book store backend reports. NoRows must stay distinguishable
// from every other failure kind because the service translates it separately.
#[derive(Debug)]
pub enum StoreError {
    NoRows,
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // the backend is throttled or temporarily unreachable, the caller may retry
    Unavailable {
        message: String,
        reason_code: Option<String>,
    },
    Malformed {
        message: String,
    },
    Cancelled,
}

impl StoreError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> StoreError {
        StoreError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>) -> StoreError {
        StoreError::Unavailable { message: message.to_string(), reason_code }
    }

    pub fn malformed(message: &str) -> StoreError {
        StoreError::Malformed { message: message.to_string() }
    }

    pub fn database_or_unavailable(message: &str, reason: Option<String>, retryable: bool) -> StoreError {
        if retryable {
            StoreError::unavailable(
                format!("ddb database unavailable error {:?} {:?}", message, reason).as_str(), reason)
        } else if reason.as_deref().map_or(false, |r| r.contains("404")) {
            StoreError::NoRows
        } else {
            StoreError::database(
                format!("ddb database error {:?} {:?}", message, reason).as_str(), reason, false)
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            StoreError::NoRows => { false }
            StoreError::Database { retryable, .. } => { *retryable }
            StoreError::Unavailable { .. } => { true }
            StoreError::Malformed { .. } => { false }
            StoreError::Cancelled => { false }
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NoRows => {
                write!(f, "no rows in result set")
            }
            StoreError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            StoreError::Unavailable { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            StoreError::Malformed { message } => {
                write!(f, "{}", message)
            }
            StoreError::Cancelled => {
                write!(f, "request cancelled")
            }
        }
    }
}

impl Error for StoreError {}

/// A specialized Result type for book stores.
pub type StoreResult<T> = Result<T, StoreError>;

// RepositoryStore selects the book store backend at construction time
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    InMemory,
}

impl RepositoryStore {
    pub fn parse(value: &str) -> Option<RepositoryStore> {
        match value.trim().to_lowercase().as_str() {
            "ddb" | "dynamodb" => Some(RepositoryStore::DynamoDB),
            "local-ddb" | "localdynamodb" => Some(RepositoryStore::LocalDynamoDB),
            "memory" | "inmemory" => Some(RepositoryStore::InMemory),
            _ => None,
        }
    }
}
