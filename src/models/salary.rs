//! Salary model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub mentor_id: String,
    #[serde(default)]
    pub mentor_name: Option<String>,
    /// `YYYY-MM`
    pub month: String,
    pub amount: u64,
    #[serde(default)]
    pub paid: bool,
}
