use crate::domain::base::DomainError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    pub fn category_not_found() -> Self {
        ApplicationError::NotFound("Category not found".to_string())
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
