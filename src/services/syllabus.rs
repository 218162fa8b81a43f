//! Syllabus service
//!
//! The syllabus is fetched once per login and served from the session cache
//! afterwards.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::Syllabus;
use crate::services::api::{segment, Ack, ApiClient};
use crate::state::SessionState;
use crate::utils::errors::Result;
use crate::utils::helpers::require_field;

#[derive(Debug, Serialize)]
struct TopicUpdate {
    completed: bool,
}

#[derive(Clone, Debug)]
pub struct SyllabusService {
    api: ApiClient,
    session: Arc<SessionState>,
    use_cache: bool,
}

impl SyllabusService {
    pub fn new(api: ApiClient, session: Arc<SessionState>, use_cache: bool) -> Self {
        Self { api, session, use_cache }
    }

    pub async fn syllabus(&self) -> Result<Syllabus> {
        if self.use_cache {
            if let Some(cached) = self.session.cached_syllabus().await {
                debug!("Serving syllabus from cache");
                return Ok(cached);
            }
        }

        let syllabus: Syllabus = self.api.get("/api/syllabus/get").await?;
        if self.use_cache {
            self.session.store_syllabus(syllabus.clone()).await;
        }
        Ok(syllabus)
    }

    /// Mark a topic done or not done, keeping the cache in step
    pub async fn set_topic(&self, topic_id: &str, completed: bool) -> Result<Ack> {
        require_field("Topic id", topic_id)?;
        info!(topic_id = topic_id, completed = completed, "Updating syllabus topic");
        let ack = self
            .api
            .patch(&format!("/api/syllabus/topic/{}", segment(topic_id)), &TopicUpdate { completed })
            .await?;

        if let Some(mut cached) = self.session.cached_syllabus().await {
            match cached.find_topic_mut(topic_id) {
                Some(topic) => {
                    topic.completed = completed;
                    self.session.store_syllabus(cached).await;
                }
                None => self.session.invalidate_syllabus().await,
            }
        }

        Ok(ack)
    }
}
