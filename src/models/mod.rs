//! Data models module
//!
//! Plain records mirrored from the PCB Point API's JSON responses

pub mod user;
pub mod student;
pub mod call;
pub mod fee;
pub mod kit;
pub mod ticket;
pub mod salary;
pub mod syllabus;
mod dates;

// Re-export commonly used models
pub use user::{Role, User, Permissions, Profile, LoginRequest, LoginResponse, CreateStaffRequest};
pub use student::{Student, ContactNumbers, Admission, CreateStudentRequest, UpdateStudentRequest};
pub use call::{CallStatus, CallKind, CallEvent, UpdateCallRequest};
pub use fee::{FeeTier, FeePlan, Payment, Fee, AddPaymentRequest, SetPlanRequest};
pub use kit::{KitStatus, KitEntry, DispatchKitRequest};
pub use ticket::{Ticket, CreateTicketRequest};
pub use salary::SalaryRecord;
pub use syllabus::{Syllabus, Subject, Chapter, Topic};
