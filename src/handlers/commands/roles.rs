//! Roles & permissions page: supervisor feature flags

use crate::handlers::commands::ack_text;
use crate::handlers::render::yes_no;
use crate::models::Permissions;
use crate::navigation::links::PATH_ROLES;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::logging;

pub async fn handle_show(services: &ServiceFactory, supervisor_id: &str) -> Result<String> {
    services.auth_middleware().require_page(PATH_ROLES).await?;
    let permissions = services.auth_service.permissions_for(supervisor_id).await?;
    Ok(format!(
        "Supervisor {}\nFee management: {}\nKit dispatch: {}\n",
        supervisor_id,
        yes_no(permissions.fee_management),
        yes_no(permissions.kit_dispatch)
    ))
}

pub async fn handle_set(
    services: &ServiceFactory,
    supervisor_id: &str,
    fee_management: bool,
    kit_dispatch: bool,
) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_ROLES).await?;
    let permissions = Permissions { fee_management, kit_dispatch };
    let ack = services.auth_service.set_permissions(supervisor_id, permissions).await?;
    logging::log_user_action(&profile.user.id, "set_permissions", Some(supervisor_id));
    Ok(ack_text(&ack, &format!("Permissions updated for {}", supervisor_id)))
}
