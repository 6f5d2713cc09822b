//! Authentication Handlers Module
//!
//! HTTP handlers for the public account endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/user/register - Create an account
//! - **`login`** - POST /api/user/login - Verify credentials, return a JWT
//!
//! Neither handler validates input itself; the credential store decides
//! what is acceptable and its messages are passed through.

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

// Re-export handlers
pub use login::login;
pub use register::register;
