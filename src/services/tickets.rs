//! Support ticket service

use tracing::info;

use crate::models::{CreateTicketRequest, Ticket};
use crate::services::api::{segment, Ack, ApiClient};
use crate::utils::errors::{PcbPointError, Result};
use crate::utils::helpers::require_field;

#[derive(Clone, Debug)]
pub struct TicketService {
    api: ApiClient,
}

impl TicketService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn tickets(&self) -> Result<Vec<Ticket>> {
        self.api.get("/api/ticket/all").await
    }

    /// Open a ticket. The audio note, when given, must be an http(s) URL of an
    /// already uploaded recording.
    pub async fn raise(&self, subject: &str, description: Option<String>, audio: Option<String>) -> Result<Ack> {
        require_field("Subject", subject)?;
        if let Some(audio) = &audio {
            let url = url::Url::parse(audio)
                .map_err(|_| PcbPointError::InvalidInput(format!("Audio must be a URL, got {}", audio)))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(PcbPointError::InvalidInput("Audio must be an http(s) URL".to_string()));
            }
        }

        info!(subject = subject, has_audio = audio.is_some(), "Raising ticket");
        let request = CreateTicketRequest {
            subject: subject.trim().to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            audio,
        };
        self.api.post("/api/ticket/raise", &request).await
    }

    pub async fn resolve(&self, ticket_id: &str) -> Result<Ack> {
        require_field("Ticket id", ticket_id)?;
        info!(ticket_id = ticket_id, "Resolving ticket");
        self.api
            .patch(&format!("/api/ticket/resolve/{}", segment(ticket_id)), &serde_json::json!({ "resolved": true }))
            .await
    }
}
