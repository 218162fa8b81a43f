//! Client state management
//!
//! This module holds the session cells shared by every page and the file
//! that keeps the token between runs.

pub mod session;
pub mod storage;

pub use session::{SessionState, TokenCell};
pub use storage::{TokenStore, token_expired};
