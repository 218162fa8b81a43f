//! Integration tests module
//!
//! Organized by page: session, route guard, call records, fees, syllabus
//! and the people pages.

pub mod guard_test;
pub mod calls_test;
pub mod fees_test;
pub mod syllabus_test;
pub mod people_test;
