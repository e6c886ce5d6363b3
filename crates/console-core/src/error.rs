//! Domain errors

use console_shared::UserId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Username does not exist: {0}")]
    UsernameNotFound(String),

    #[error("Incorrect password")]
    InvalidPassword,

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
