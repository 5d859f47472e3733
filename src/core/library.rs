use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::repository::StoreError;

// LibraryError is the closed set of failures returned by the lookup service. Callers
// match on the variant, never on the message.
#[derive(Debug)]
pub enum LibraryError {
    // construction arguments were invalid, the service was never built
    Config {
        message: String,
    },
    EmptyName,
    EmptyAuthor,
    UnsupportedAuthor {
        author: String,
    },
    // the store reported no matching rows, an expected outcome rather than a fault
    NoBooksFound,
    DataAccess {
        message: String,
        source: StoreError,
    },
}

impl LibraryError {
    pub fn config(message: &str) -> LibraryError {
        LibraryError::Config { message: message.to_string() }
    }

    pub fn unsupported_author(author: &str) -> LibraryError {
        LibraryError::UnsupportedAuthor { author: author.to_string() }
    }

    pub fn data_access(message: &str, source: StoreError) -> LibraryError {
        LibraryError::DataAccess { message: message.to_string(), source }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::DataAccess { source, .. } => { source.retryable() }
            _ => { false }
        }
    }
}

impl From<StoreError> for LibraryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NoRows => LibraryError::NoBooksFound,
            other => LibraryError::data_access("failed to read from store", other),
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Config { message } => {
                write!(f, "invalid configuration: {}", message)
            }
            LibraryError::EmptyName => {
                write!(f, "book name cannot be empty")
            }
            LibraryError::EmptyAuthor => {
                write!(f, "author name cannot be empty")
            }
            LibraryError::UnsupportedAuthor { author } => {
                write!(f, "author not supported: {}", author)
            }
            LibraryError::NoBooksFound => {
                write!(f, "no books match your criteria")
            }
            LibraryError::DataAccess { message, source } => {
                write!(f, "{}: {}", message, source)
            }
        }
    }
}

impl Error for LibraryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LibraryError::DataAccess { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A specialized Result type for the lookup service.
pub type LibraryResult<T> = Result<T, LibraryError>;
