//! Kit dispatch page

use chrono::Local;

use crate::handlers::commands::ack_text;
use crate::handlers::render::Table;
use crate::navigation::links::PATH_KITS;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::parse_date;
use crate::utils::logging;

pub async fn handle_kits(services: &ServiceFactory) -> Result<String> {
    services.auth_middleware().require_page(PATH_KITS).await?;
    let kits = services.kit_service.kits().await?;

    if kits.is_empty() {
        return Ok("No kits to dispatch\n".to_string());
    }

    let mut table = Table::new(["Student", "Name", "Status", "Tracking", "Dispatched"]);
    for entry in &kits {
        table.row([
            entry.student_id.clone(),
            entry.student_name.clone(),
            entry.kit.label().to_string(),
            entry.kit.tracking_id.clone().unwrap_or_else(|| "-".to_string()),
            entry.kit.dispatched_on.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    Ok(table.render())
}

pub async fn handle_ready(services: &ServiceFactory, student_id: &str) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_KITS).await?;
    let ack = services.kit_service.mark_ready(student_id).await?;
    logging::log_user_action(&profile.user.id, "kit_ready", Some(student_id));
    Ok(ack_text(&ack, &format!("Kit for {} marked ready", student_id)))
}

pub async fn handle_dispatch(
    services: &ServiceFactory,
    student_id: &str,
    tracking_id: &str,
    date: Option<&str>,
) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_KITS).await?;
    let dispatched_on = match date {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };
    let ack = services
        .kit_service
        .dispatch(student_id, tracking_id, dispatched_on)
        .await?;
    logging::log_user_action(&profile.user.id, "kit_dispatch", Some(student_id));
    Ok(ack_text(&ack, &format!("Kit for {} dispatched ({})", student_id, tracking_id)))
}
