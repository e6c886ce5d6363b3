//! # Console Core
//! 
//! Domain entities, repository traits, the menu tree pipeline, and the
//! services that resolve a user's roles into a navigation menu.

pub mod domain;
pub mod menu;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
