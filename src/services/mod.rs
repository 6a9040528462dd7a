pub mod advocates;

use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The record store failed while executing a query; callers surface this
    /// as an opaque failure and log the detail.
    #[error("query execution failed: {0}")]
    QueryExecution(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
