//! Support tickets: the admin list and the raise form

use crate::handlers::commands::ack_text;
use crate::handlers::render::{yes_no, Table};
use crate::navigation::links::{PATH_RAISE_TICKET, PATH_TICKETS};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::helpers::{format_timestamp, truncate_text};
use crate::utils::logging;

pub async fn handle_tickets(services: &ServiceFactory) -> Result<String> {
    services.auth_middleware().require_page(PATH_TICKETS).await?;
    let tickets = services.ticket_service.tickets().await?;

    if tickets.is_empty() {
        return Ok("No tickets\n".to_string());
    }

    let mut table = Table::new(["Id", "Subject", "Raised by", "Audio", "Resolved", "Created"]);
    for ticket in &tickets {
        table.row([
            ticket.id.clone(),
            truncate_text(&ticket.subject, 40),
            ticket.raised_by.clone().unwrap_or_else(|| "-".to_string()),
            yes_no(ticket.audio.is_some()).to_string(),
            yes_no(ticket.resolved).to_string(),
            ticket.created_at.map(format_timestamp).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    Ok(table.render())
}

pub async fn handle_raise(
    services: &ServiceFactory,
    subject: &str,
    description: Option<String>,
    audio: Option<String>,
) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_RAISE_TICKET).await?;
    let ack = services.ticket_service.raise(subject, description, audio).await?;
    logging::log_user_action(&profile.user.id, "raise_ticket", Some(subject));
    Ok(ack_text(&ack, "Ticket raised"))
}

pub async fn handle_resolve(services: &ServiceFactory, ticket_id: &str) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_TICKETS).await?;
    let ack = services.ticket_service.resolve(ticket_id).await?;
    logging::log_user_action(&profile.user.id, "resolve_ticket", Some(ticket_id));
    Ok(ack_text(&ack, &format!("Ticket {} resolved", ticket_id)))
}
