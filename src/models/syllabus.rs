//! Syllabus model: subjects → chapters → topics

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub name: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Syllabus {
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Syllabus {
    /// (completed, total) topic counts
    pub fn progress(&self) -> (usize, usize) {
        self.subjects
            .iter()
            .flat_map(|s| s.chapters.iter())
            .flat_map(|c| c.topics.iter())
            .fold((0, 0), |(done, total), t| (done + t.completed as usize, total + 1))
    }

    pub fn find_topic_mut(&mut self, topic_id: &str) -> Option<&mut Topic> {
        self.subjects
            .iter_mut()
            .flat_map(|s| s.chapters.iter_mut())
            .flat_map(|c| c.topics.iter_mut())
            .find(|t| t.id == topic_id)
    }
}
