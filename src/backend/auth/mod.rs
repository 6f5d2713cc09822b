//! Authentication Module
//!
//! This module handles user registration, login and token issuance.
//!
//! # Architecture
//!
//! - **`users`** - Stored user model
//! - **`sessions`** - JWT token codec
//! - **`handlers`** - HTTP handlers for the register and login endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: client sends `userName`/`password` → store creates the user
//! 2. **Login**: client sends credentials → store verifies them → JWT returned
//! 3. **Protected routes**: client sends `Authorization: JWT <token>` →
//!    `middleware::auth` verifies it → identity attached to the request
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt by the store
//! - Tokens are stateless; there is no revocation list
//! - Login failures do not reveal whether the user exists

/// User model
pub mod users;

/// JWT token codec
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, register};
pub use sessions::{Claims, TokenCodec, TokenError, TokenRejection};
pub use users::User;
