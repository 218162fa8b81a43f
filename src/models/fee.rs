//! Fee model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::utils::errors::PcbPointError;
use super::dates::de_day;

/// Mentorship tier a fee plan belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeTier {
    Elite,
    Pro,
    Max,
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeTier::Elite => write!(f, "Elite"),
            FeeTier::Pro => write!(f, "Pro"),
            FeeTier::Max => write!(f, "Max"),
        }
    }
}

impl FromStr for FeeTier {
    type Err = PcbPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elite" => Ok(FeeTier::Elite),
            "pro" => Ok(FeeTier::Pro),
            "max" => Ok(FeeTier::Max),
            _ => Err(PcbPointError::InvalidInput(format!("Unknown fee tier: {}", s))),
        }
    }
}

/// Installment schedule for a tier. Amounts are whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePlan {
    pub tier: FeeTier,
    pub total: u64,
    pub installments: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub amount: u64,
    #[serde(deserialize_with = "de_day")]
    pub date: NaiveDate,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    #[serde(default)]
    pub student_id: Option<String>,
    pub plan: FeePlan,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub cleared: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPaymentRequest {
    pub student_id: String,
    pub payment: Payment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPlanRequest {
    pub student_id: String,
    pub plan: FeePlan,
}
