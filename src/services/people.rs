//! People service implementation
//!
//! Listing, adding and editing the mentor hierarchy: supervisors, senior
//! mentors, group mentors and students.

use tracing::{debug, info};

use crate::models::{
    CreateStaffRequest, CreateStudentRequest, Role, Student, UpdateStudentRequest, User,
};
use crate::services::api::{segment, Ack, ApiClient};
use crate::utils::errors::{PcbPointError, Result};
use crate::utils::helpers::{require_email, require_field, require_phone};

/// Collection path segment for a staff role
fn staff_collection(role: Role) -> Result<&'static str> {
    match role {
        Role::Supervisor => Ok("supervisors"),
        Role::SeniorMentor => Ok("seniorMentors"),
        Role::GroupMentor => Ok("groupMentors"),
        Role::Admin => Err(PcbPointError::InvalidInput("Admins are not managed from here".to_string())),
    }
}

/// Validate a staff form; everyone below admin needs a parent in the hierarchy
pub fn validate_staff(role: Role, request: &CreateStaffRequest) -> Result<()> {
    staff_collection(role)?;
    require_field("Name", &request.name)?;
    require_email(&request.email)?;
    require_phone("Phone", &request.phone)?;
    if request.password.len() < 6 {
        return Err(PcbPointError::InvalidInput("Password must be at least 6 characters".to_string()));
    }
    if role != Role::Supervisor && request.parent_id.as_deref().map_or(true, |p| p.trim().is_empty()) {
        let parent = role.parent().map(|r| r.label()).unwrap_or("parent");
        return Err(PcbPointError::InvalidInput(format!("A {} must be assigned to a {}", role.label(), parent)));
    }
    Ok(())
}

/// Validate a student admission form
pub fn validate_student(request: &CreateStudentRequest) -> Result<()> {
    require_field("Name", &request.name)?;
    require_field("Class", &request.class)?;
    require_field("Platform", &request.platform)?;
    require_phone("Student phone", &request.contact.student)?;
    require_phone("Parent phone", &request.contact.parent)?;
    if let Some(alternate) = &request.contact.alternate {
        require_phone("Alternate phone", alternate)?;
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct PeopleService {
    api: ApiClient,
}

impl PeopleService {
    /// Create a new PeopleService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Staff of one role visible to the current user
    pub async fn staff(&self, role: Role) -> Result<Vec<User>> {
        let collection = staff_collection(role)?;
        debug!(role = %role, "Listing staff");
        self.api.get(&format!("/api/detail/{}", collection)).await
    }

    pub async fn students(&self) -> Result<Vec<Student>> {
        self.api.get("/api/detail/students").await
    }

    pub async fn student(&self, student_id: &str) -> Result<Student> {
        require_field("Student id", student_id)?;
        match self.api.get(&format!("/api/detail/student/{}", segment(student_id))).await {
            Err(PcbPointError::Api(crate::utils::errors::ApiError::Status { status: 404, .. })) => {
                Err(PcbPointError::StudentNotFound { student_id: student_id.to_string() })
            }
            other => other,
        }
    }

    pub async fn user(&self, user_id: &str) -> Result<User> {
        require_field("User id", user_id)?;
        self.api.get(&format!("/api/detail/user/{}", segment(user_id))).await
    }

    pub async fn add_staff(&self, role: Role, request: &CreateStaffRequest) -> Result<Ack> {
        validate_staff(role, request)?;
        info!(role = %role, name = %request.name, "Adding staff member");
        self.api.post(&format!("/api/add/{}", role.as_str()), request).await
    }

    pub async fn add_student(&self, request: &CreateStudentRequest) -> Result<Ack> {
        validate_student(request)?;
        info!(name = %request.name, "Adding student");
        self.api.post("/api/add/student", request).await
    }

    pub async fn update_student(&self, student_id: &str, request: &UpdateStudentRequest) -> Result<Ack> {
        require_field("Student id", student_id)?;
        if let Some(name) = &request.name {
            require_field("Name", name)?;
        }
        if let Some(contact) = &request.contact {
            require_phone("Student phone", &contact.student)?;
            require_phone("Parent phone", &contact.parent)?;
        }
        self.api
            .patch(&format!("/api/detail/student/{}", segment(student_id)), request)
            .await
    }
}
