//! Student model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use super::call::CallEvent;
use super::fee::Fee;
use super::kit::KitStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactNumbers {
    pub student: String,
    pub parent: String,
    #[serde(default)]
    pub alternate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    pub contact: ContactNumbers,
    #[serde(default)]
    pub group_mentor_id: Option<String>,
    #[serde(default)]
    pub fee: Option<Fee>,
    #[serde(default)]
    pub kit: Option<KitStatus>,
    #[serde(default)]
    pub calls: Vec<CallEvent>,
}

/// A pending admission from `/api/new/*`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: String,
    pub class: String,
    pub platform: String,
    pub contact: ContactNumbers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_mentor_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactNumbers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_mentor_id: Option<String>,
}
