//! Fee plans and payments

pub mod plan;

pub use plan::{FeeLedger, MAX_INSTALLMENTS};
