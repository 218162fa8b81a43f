//! Salary page

use chrono::Local;

use crate::handlers::commands::ack_text;
use crate::handlers::render::{yes_no, Table};
use crate::models::Role;
use crate::navigation::links::PATH_SALARY;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::format_rupees;
use crate::utils::logging;

pub async fn handle_salaries(services: &ServiceFactory, month: Option<&str>) -> Result<String> {
    services.auth_middleware().require_page(PATH_SALARY).await?;
    let month = month
        .map(str::to_string)
        .unwrap_or_else(|| Local::now().format("%Y-%m").to_string());
    let records = services.salary_service.salaries(&month).await?;

    if records.is_empty() {
        return Ok(format!("No salary records for {}\n", month));
    }

    let mut table = Table::new(["Id", "Mentor", "Month", "Amount", "Paid"]);
    let mut total = 0u64;
    for record in &records {
        total += record.amount;
        table.row([
            record.id.clone(),
            record.mentor_name.clone().unwrap_or_else(|| record.mentor_id.clone()),
            record.month.clone(),
            format_rupees(record.amount),
            yes_no(record.paid).to_string(),
        ]);
    }
    Ok(format!("{}Total: {}\n", table.render(), format_rupees(total)))
}

/// Only admins settle salaries
pub async fn handle_mark_paid(services: &ServiceFactory, record_id: &str) -> Result<String> {
    let profile = services.auth_middleware().require_role(&[Role::Admin]).await?;
    let ack = services.salary_service.mark_paid(record_id).await?;
    logging::log_user_action(&profile.user.id, "salary_paid", Some(record_id));
    Ok(ack_text(&ack, &format!("Salary {} marked paid", record_id)))
}
