//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`api_routes`** - The `/api/user` endpoints
//!
//! # Routes
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | `/api/user/register` | none |
//! | POST | `/api/user/login` | none |
//! | GET | `/api/user/favourites` | `JWT` token |
//! | PUT | `/api/user/favourites/{id}` | `JWT` token |
//! | DELETE | `/api/user/favourites/{id}` | `JWT` token |

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
