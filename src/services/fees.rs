//! Fee management service

use tracing::info;

use crate::fees::FeeLedger;
use crate::models::{AddPaymentRequest, Fee, FeePlan, Payment, SetPlanRequest};
use crate::services::api::{segment, Ack, ApiClient};
use crate::utils::errors::Result;
use crate::utils::helpers::require_field;

#[derive(Clone, Debug)]
pub struct FeeService {
    api: ApiClient,
}

impl FeeService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn fees(&self) -> Result<Vec<Fee>> {
        self.api.get("/api/detail/fees").await
    }

    pub async fn fee(&self, student_id: &str) -> Result<Fee> {
        require_field("Student id", student_id)?;
        self.api.get(&format!("/api/detail/fee/{}", segment(student_id))).await
    }

    /// Record a payment after checking it against what is still owed
    pub async fn add_payment(&self, student_id: &str, payment: Payment) -> Result<Ack> {
        let fee = self.fee(student_id).await?;
        FeeLedger::from_fee(&fee)?.check_payment(payment.amount)?;

        info!(student_id = student_id, amount = payment.amount, "Recording fee payment");
        let request = AddPaymentRequest {
            student_id: student_id.to_string(),
            payment,
        };
        self.api.post("/api/add/payment", &request).await
    }

    pub async fn set_plan(&self, student_id: &str, plan: FeePlan) -> Result<Ack> {
        require_field("Student id", student_id)?;
        plan.validate()?;
        info!(student_id = student_id, tier = %plan.tier, total = plan.total, "Setting fee plan");
        let request = SetPlanRequest {
            student_id: student_id.to_string(),
            plan,
        };
        self.api
            .patch(&format!("/api/detail/fee/{}/plan", segment(student_id)), &request)
            .await
    }
}
