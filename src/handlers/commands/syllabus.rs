//! Syllabus progress page

use crate::handlers::commands::ack_text;
use crate::models::Syllabus;
use crate::navigation::links::PATH_SYLLABUS;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

pub async fn handle_syllabus(services: &ServiceFactory) -> Result<String> {
    services.auth_middleware().require_page(PATH_SYLLABUS).await?;
    let syllabus = services.syllabus_service.syllabus().await?;
    Ok(render_syllabus(&syllabus))
}

pub fn render_syllabus(syllabus: &Syllabus) -> String {
    let (done, total) = syllabus.progress();
    let mut out = format!("Progress: {}/{} topics\n", done, total);
    for subject in &syllabus.subjects {
        out.push_str(&format!("{}\n", subject.name));
        for chapter in &subject.chapters {
            out.push_str(&format!("  {}\n", chapter.name));
            for topic in &chapter.topics {
                let mark = if topic.completed { "x" } else { " " };
                out.push_str(&format!("    [{}] {} ({})\n", mark, topic.name, topic.id));
            }
        }
    }
    out
}

pub async fn handle_topic(services: &ServiceFactory, topic_id: &str, completed: bool) -> Result<String> {
    services.auth_middleware().require_page(PATH_SYLLABUS).await?;
    let ack = services.syllabus_service.set_topic(topic_id, completed).await?;
    let fallback = if completed {
        format!("Topic {} marked complete", topic_id)
    } else {
        format!("Topic {} marked incomplete", topic_id)
    };
    Ok(ack_text(&ack, &fallback))
}
