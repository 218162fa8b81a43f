//! Call records service
//!
//! Fetches call events and hands them to the weekly grid.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

use crate::calls::{week_start, CallGrid};
use crate::models::{CallEvent, CallKind, CallStatus, UpdateCallRequest};
use crate::services::api::{Ack, ApiClient};
use crate::utils::errors::{PcbPointError, Result};
use crate::utils::helpers::require_field;

#[derive(Debug, Serialize)]
struct RangeQuery {
    from: String,
    to: String,
}

#[derive(Clone, Debug)]
pub struct CallService {
    api: ApiClient,
}

impl CallService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Call events between two dates, both inclusive
    pub async fn records(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<CallEvent>> {
        if to < from {
            return Err(PcbPointError::InvalidInput(format!("Range end {} is before start {}", to, from)));
        }
        let query = RangeQuery {
            from: from.format("%Y-%m-%d").to_string(),
            to: to.format("%Y-%m-%d").to_string(),
        };
        debug!(from = %query.from, to = %query.to, "Fetching call records");
        self.api.get_query("/api/call/records", &query).await
    }

    /// The grid for the week containing `date`
    pub async fn week_grid(&self, date: NaiveDate) -> Result<CallGrid> {
        let monday = week_start(date);
        let events = self.records(monday, monday + Duration::days(6)).await?;
        Ok(CallGrid::build(monday, &events))
    }

    /// Record the outcome of a call
    pub async fn update(
        &self,
        student_id: &str,
        date: NaiveDate,
        status: CallStatus,
        kind: CallKind,
        remark: Option<String>,
    ) -> Result<Ack> {
        require_field("Student id", student_id)?;
        let request = UpdateCallRequest {
            student_id: student_id.to_string(),
            date,
            status,
            kind,
            remark: remark.filter(|r| !r.trim().is_empty()),
        };
        info!(student_id = student_id, date = %date, status = %status, "Updating call status");
        self.api.patch("/api/call/update", &request).await
    }
}
