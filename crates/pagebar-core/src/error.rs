//! Page store error types

use thiserror::Error;

use crate::pages::PageId;

/// Errors raised by page store lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// No page carries this id
    #[error("page not found: {0}")]
    NotFound(PageId),

    /// A drag payload that does not name a page id
    #[error("invalid drag payload: {0:?}")]
    InvalidPayload(String),
}

/// Result alias for page store operations
pub type Result<T> = std::result::Result<T, PageError>;
