//! Kit dispatch model

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use super::dates::de_opt_day;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitStatus {
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub dispatched: bool,
    #[serde(default)]
    pub tracking_id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_day")]
    pub dispatched_on: Option<NaiveDate>,
}

impl KitStatus {
    pub fn label(&self) -> &'static str {
        match (self.ready, self.dispatched) {
            (_, true) => "Dispatched",
            (true, false) => "Ready",
            (false, false) => "Pending",
        }
    }
}

/// A row of the kit dispatch page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitEntry {
    pub student_id: String,
    pub student_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub kit: KitStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchKitRequest {
    pub student_id: String,
    pub tracking_id: String,
    pub dispatched_on: NaiveDate,
}
