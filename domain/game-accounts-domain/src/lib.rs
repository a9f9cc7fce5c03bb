use thiserror::Error;

pub mod account;
pub mod game;
pub mod notification;
pub mod simulation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn invalid_argument<T, R>(msg: T) -> DomainResult<R>
    where
        T: Into<String>,
    {
        Err(DomainError::InvalidArgument(msg.into()))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
