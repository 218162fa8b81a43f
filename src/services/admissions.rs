//! New admissions service

use serde::Serialize;
use tracing::info;

use crate::models::Admission;
use crate::services::api::{segment, Ack, ApiClient};
use crate::utils::errors::Result;
use crate::utils::helpers::require_field;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApproveRequest<'a> {
    group_mentor_id: &'a str,
}

#[derive(Clone, Debug)]
pub struct AdmissionService {
    api: ApiClient,
}

impl AdmissionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Admissions waiting to be assigned
    pub async fn pending(&self) -> Result<Vec<Admission>> {
        self.api.get("/api/new/admissions").await
    }

    /// Turn an admission into a student under a group mentor
    pub async fn approve(&self, admission_id: &str, group_mentor_id: &str) -> Result<Ack> {
        require_field("Admission id", admission_id)?;
        require_field("Group mentor", group_mentor_id)?;
        info!(admission_id = admission_id, group_mentor_id = group_mentor_id, "Approving admission");
        self.api
            .post(
                &format!("/api/new/approve/{}", segment(admission_id)),
                &ApproveRequest { group_mentor_id },
            )
            .await
    }
}
