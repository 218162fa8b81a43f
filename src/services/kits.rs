//! Kit dispatch service

use chrono::NaiveDate;
use tracing::info;

use crate::models::{DispatchKitRequest, KitEntry};
use crate::services::api::{segment, Ack, ApiClient};
use crate::utils::errors::Result;
use crate::utils::helpers::require_field;

#[derive(Clone, Debug)]
pub struct KitService {
    api: ApiClient,
}

impl KitService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn kits(&self) -> Result<Vec<KitEntry>> {
        self.api.get("/api/detail/kits").await
    }

    pub async fn mark_ready(&self, student_id: &str) -> Result<Ack> {
        require_field("Student id", student_id)?;
        info!(student_id = student_id, "Marking kit ready");
        self.api
            .patch(&format!("/api/detail/kit/{}/ready", segment(student_id)), &serde_json::json!({ "ready": true }))
            .await
    }

    pub async fn dispatch(&self, student_id: &str, tracking_id: &str, dispatched_on: NaiveDate) -> Result<Ack> {
        require_field("Student id", student_id)?;
        require_field("Tracking id", tracking_id)?;
        info!(student_id = student_id, tracking_id = tracking_id, "Dispatching kit");
        let request = DispatchKitRequest {
            student_id: student_id.to_string(),
            tracking_id: tracking_id.trim().to_string(),
            dispatched_on,
        };
        self.api.post("/api/add/dispatch", &request).await
    }
}
