//! Salary service

use serde::Serialize;
use tracing::info;

use crate::models::SalaryRecord;
use crate::services::api::{segment, Ack, ApiClient};
use crate::utils::errors::Result;
use crate::utils::helpers::{require_field, require_month};

#[derive(Debug, Serialize)]
struct MonthQuery<'a> {
    month: &'a str,
}

#[derive(Clone, Debug)]
pub struct SalaryService {
    api: ApiClient,
}

impl SalaryService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Salary records for a `YYYY-MM` month
    pub async fn salaries(&self, month: &str) -> Result<Vec<SalaryRecord>> {
        require_month(month)?;
        self.api.get_query("/api/salary/list", &MonthQuery { month }).await
    }

    pub async fn mark_paid(&self, record_id: &str) -> Result<Ack> {
        require_field("Salary record id", record_id)?;
        info!(record_id = record_id, "Marking salary paid");
        self.api
            .patch(&format!("/api/salary/paid/{}", segment(record_id)), &serde_json::json!({ "paid": true }))
            .await
    }
}
