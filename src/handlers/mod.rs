//! Page handlers module
//!
//! This module contains the command-line pages of the client:
//! - Command definitions and their handlers, one per page
//! - Plain-text rendering shared by the pages

pub mod commands;
pub mod render;

// Re-export commonly used handler items
pub use commands::{handle_command, Command};
pub use render::Table;
