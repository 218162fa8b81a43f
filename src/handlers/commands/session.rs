//! Login, logout, identity and navigation pages

use tracing::info;

use crate::handlers::render::{yes_no, Table};
use crate::models::{Profile, Role};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle `login`
pub async fn handle_login(services: &ServiceFactory, role: Role, email: &str, password: &str) -> Result<String> {
    let profile = services.session.login(role, email, password).await?;
    info!(user_id = %profile.user.id, role = %profile.role(), "Logged in");
    Ok(format!("Logged in as {} ({})\n", profile.user.name, profile.role()))
}

/// Handle `logout`
pub async fn handle_logout(services: &ServiceFactory) -> Result<String> {
    services.session.logout().await?;
    Ok("Logged out\n".to_string())
}

/// Handle `whoami`
pub async fn handle_whoami(services: &ServiceFactory) -> Result<String> {
    let profile = services.session.profile().await?;
    Ok(render_profile(&profile))
}

/// Handle `nav`
pub async fn handle_nav(services: &ServiceFactory) -> Result<String> {
    let (profile, links) = services.auth_middleware().navigation().await?;

    let mut table = Table::new(["Page", "Path"]);
    for link in &links {
        table.row([link.label, link.path]);
    }

    Ok(format!("Pages for {}:\n{}", profile.role(), table.render()))
}

fn render_profile(profile: &Profile) -> String {
    let mut out = format!(
        "{} <{}>\nRole: {}\n",
        profile.user.name,
        profile.user.email.as_deref().unwrap_or("no email"),
        profile.role()
    );
    if profile.role() == Role::Supervisor {
        out.push_str(&format!(
            "Fee management: {}\nKit dispatch: {}\n",
            yes_no(profile.permissions.fee_management),
            yes_no(profile.permissions.kit_dispatch)
        ));
    }
    out
}
