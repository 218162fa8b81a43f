//! PCB Point admin client
//!
//! Role-based client for the PCB Point mentorship platform. Admins,
//! supervisors, senior mentors and group mentors log in, browse the pages
//! their role allows and manage students, calls, fees, kits, salaries,
//! syllabus progress and support tickets over the platform's REST API.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod state;
pub mod utils;
pub mod middleware;
pub mod navigation;
pub mod calls;
pub mod fees;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PcbPointError, ApiError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{SessionState, TokenStore};
pub use calls::CallGrid;
pub use fees::FeeLedger;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
