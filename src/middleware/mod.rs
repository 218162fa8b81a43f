//! Middleware module
//!
//! Guards that run before a page does any work.

pub mod auth;

pub use auth::{AuthMiddleware, check_page};
