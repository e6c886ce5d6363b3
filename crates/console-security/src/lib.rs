//! # Console Security
//! 
//! Security utilities: JWT access tokens and password verification.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordService};
