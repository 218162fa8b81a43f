//! New admissions page

use crate::handlers::commands::ack_text;
use crate::handlers::render::Table;
use crate::navigation::links::PATH_ADMISSIONS;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::format_timestamp;
use crate::utils::logging;

pub async fn handle_admissions(services: &ServiceFactory) -> Result<String> {
    services.auth_middleware().require_page(PATH_ADMISSIONS).await?;
    let pending = services.admission_service.pending().await?;

    if pending.is_empty() {
        return Ok("No pending admissions\n".to_string());
    }

    let mut table = Table::new(["Id", "Name", "Phone", "Class", "Platform", "Received"]);
    for admission in &pending {
        table.row([
            admission.id.clone(),
            admission.name.clone(),
            admission.phone.clone(),
            admission.class.clone().unwrap_or_else(|| "-".to_string()),
            admission.platform.clone().unwrap_or_else(|| "-".to_string()),
            admission.created_at.map(format_timestamp).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    Ok(table.render())
}

pub async fn handle_approve(services: &ServiceFactory, admission_id: &str, group_mentor_id: &str) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_ADMISSIONS).await?;
    let ack = services.admission_service.approve(admission_id, group_mentor_id).await?;
    logging::log_user_action(&profile.user.id, "approve_admission", Some(admission_id));
    Ok(ack_text(&ack, &format!("Admission {} approved", admission_id)))
}
