//! Call record model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::errors::PcbPointError;
use super::dates::de_day;

/// Per-day contact status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallStatus {
    Scheduled,
    Done,
    #[serde(rename = "DNP")]
    DidNotPick,
    #[default]
    Nothing,
}

impl CallStatus {
    /// How much a status tells us about the day. A completed call beats a
    /// missed one, which beats a plan.
    pub fn specificity(&self) -> u8 {
        match self {
            CallStatus::Done => 3,
            CallStatus::DidNotPick => 2,
            CallStatus::Scheduled => 1,
            CallStatus::Nothing => 0,
        }
    }

    /// Short cell text for the weekly grid
    pub fn symbol(&self) -> &'static str {
        match self {
            CallStatus::Done => "✓",
            CallStatus::DidNotPick => "✗",
            CallStatus::Scheduled => "•",
            CallStatus::Nothing => "-",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Scheduled => "Scheduled",
            CallStatus::Done => "Done",
            CallStatus::DidNotPick => "DNP",
            CallStatus::Nothing => "Nothing",
        }
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CallStatus {
    type Err = PcbPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(CallStatus::Scheduled),
            "done" => Ok(CallStatus::Done),
            "dnp" => Ok(CallStatus::DidNotPick),
            "nothing" => Ok(CallStatus::Nothing),
            _ => Err(PcbPointError::InvalidInput(format!(
                "Unknown call status: {} (expected Scheduled, Done, DNP or Nothing)",
                s
            ))),
        }
    }
}

/// Who was called
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    #[default]
    Student,
    Parent,
}

/// One call event for a student on a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallEvent {
    pub student_id: String,
    #[serde(deserialize_with = "de_day")]
    pub date: NaiveDate,
    pub status: CallStatus,
    #[serde(default)]
    pub kind: CallKind,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCallRequest {
    pub student_id: String,
    pub date: NaiveDate,
    pub status: CallStatus,
    pub kind: CallKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}
