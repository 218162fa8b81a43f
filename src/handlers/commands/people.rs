//! Hierarchy pages: staff lists, students, add forms

use crate::handlers::commands::ack_text;
use crate::handlers::render::Table;
use crate::models::{ContactNumbers, CreateStaffRequest, CreateStudentRequest, Role, UpdateStudentRequest};
use crate::navigation::links::{
    PATH_ADD_GROUP_MENTOR, PATH_ADD_SENIOR_MENTOR, PATH_ADD_STUDENT, PATH_ADD_SUPERVISOR,
    PATH_GROUP_MENTORS, PATH_SENIOR_MENTORS, PATH_STUDENTS, PATH_SUPERVISORS,
};
use crate::services::ServiceFactory;
use crate::utils::errors::{PcbPointError, Result};
use crate::utils::helpers::format_rupees;
use crate::utils::logging;
use crate::fees::FeeLedger;

/// Raw add-student form as typed by the user
#[derive(Debug, Clone)]
pub struct StudentForm {
    pub name: String,
    pub class: String,
    pub platform: String,
    pub student_phone: String,
    pub parent_phone: String,
    pub alternate_phone: Option<String>,
    pub group_mentor: Option<String>,
}

fn list_path(role: Role) -> Result<&'static str> {
    match role {
        Role::Supervisor => Ok(PATH_SUPERVISORS),
        Role::SeniorMentor => Ok(PATH_SENIOR_MENTORS),
        Role::GroupMentor => Ok(PATH_GROUP_MENTORS),
        Role::Admin => Err(PcbPointError::InvalidInput("There is no admin list".to_string())),
    }
}

fn add_path(role: Role) -> Result<&'static str> {
    match role {
        Role::Supervisor => Ok(PATH_ADD_SUPERVISOR),
        Role::SeniorMentor => Ok(PATH_ADD_SENIOR_MENTOR),
        Role::GroupMentor => Ok(PATH_ADD_GROUP_MENTOR),
        Role::Admin => Err(PcbPointError::InvalidInput("Admins cannot be added here".to_string())),
    }
}

/// Handle `staff <role>`
pub async fn handle_staff_list(services: &ServiceFactory, role: Role) -> Result<String> {
    services.auth_middleware().require_page(list_path(role)?).await?;
    let staff = services.people_service.staff(role).await?;

    if staff.is_empty() {
        return Ok(format!("No {} found\n", role.label()));
    }

    let mut table = Table::new(["Id", "Name", "Email", "Phone", "Reports to"]);
    for member in &staff {
        table.row([
            member.id.as_str(),
            member.name.as_str(),
            member.email.as_deref().unwrap_or("-"),
            member.phone.as_deref().unwrap_or("-"),
            member.parent_id.as_deref().unwrap_or("-"),
        ]);
    }
    Ok(table.render())
}

/// Handle `add-staff`
pub async fn handle_add_staff(
    services: &ServiceFactory,
    role: Role,
    name: String,
    email: String,
    phone: String,
    password: String,
    parent: Option<String>,
) -> Result<String> {
    let profile = services.auth_middleware().require_page(add_path(role)?).await?;

    // Without an explicit parent, the new member goes directly under the
    // current user when they sit one level above
    let parent = parent.or_else(|| {
        (role.parent() == Some(profile.role())).then(|| profile.user.id.clone())
    });

    let request = CreateStaffRequest { name, email, phone, password, parent_id: parent };
    let ack = services.people_service.add_staff(role, &request).await?;
    logging::log_user_action(&profile.user.id, "add_staff", Some(role.as_str()));
    Ok(ack_text(&ack, &format!("{} {} added", role.label(), request.name)))
}

/// Handle `students`
pub async fn handle_students(services: &ServiceFactory) -> Result<String> {
    services.auth_middleware().require_page(PATH_STUDENTS).await?;
    let students = services.people_service.students().await?;

    if students.is_empty() {
        return Ok("No students found\n".to_string());
    }

    let mut table = Table::new(["Id", "Name", "Class", "Platform", "Phone", "Parent", "Fee", "Kit"]);
    for student in &students {
        let fee = match &student.fee {
            Some(fee) if fee.cleared => "cleared".to_string(),
            Some(fee) => FeeLedger::from_fee(fee)
                .map(|ledger| format!("{} due", format_rupees(ledger.outstanding())))
                .unwrap_or_else(|_| "invalid plan".to_string()),
            None => "-".to_string(),
        };
        table.row([
            student.id.clone(),
            student.name.clone(),
            student.class.clone().unwrap_or_else(|| "-".to_string()),
            student.platform.clone().unwrap_or_else(|| "-".to_string()),
            student.contact.student.clone(),
            student.contact.parent.clone(),
            fee,
            student.kit.as_ref().map(|k| k.label()).unwrap_or("-").to_string(),
        ]);
    }
    Ok(table.render())
}

/// Handle `student <id>`
pub async fn handle_student_detail(services: &ServiceFactory, student_id: &str) -> Result<String> {
    services.auth_middleware().require_page(PATH_STUDENTS).await?;
    let student = services.people_service.student(student_id).await?;

    let mut out = format!(
        "{} ({})\nClass: {}\nPlatform: {}\nStudent phone: {}\nParent phone: {}\n",
        student.name,
        student.id,
        student.class.as_deref().unwrap_or("-"),
        student.platform.as_deref().unwrap_or("-"),
        student.contact.student,
        student.contact.parent,
    );
    if let Some(alternate) = &student.contact.alternate {
        out.push_str(&format!("Alternate phone: {}\n", alternate));
    }
    if let Some(mentor) = &student.group_mentor_id {
        // Fall back to the bare id when the mentor record is not visible to us
        let name = match services.people_service.user(mentor).await {
            Ok(user) => user.name,
            Err(_) => mentor.clone(),
        };
        out.push_str(&format!("Group mentor: {}\n", name));
    }
    if let Some(fee) = &student.fee {
        match FeeLedger::from_fee(fee) {
            Ok(ledger) => out.push_str(&format!(
                "Fee: {} plan, paid {} of {}\n",
                fee.plan.tier,
                format_rupees(ledger.paid()),
                format_rupees(fee.plan.total)
            )),
            Err(_) => out.push_str(&format!("Fee: {} plan, invalid plan\n", fee.plan.tier)),
        }
    }
    if let Some(kit) = &student.kit {
        out.push_str(&format!("Kit: {}\n", kit.label()));
    }
    if !student.calls.is_empty() {
        let mut calls = student.calls.clone();
        calls.sort_by(|a, b| b.date.cmp(&a.date));
        out.push_str("Recent calls:\n");
        for call in calls.iter().take(5) {
            out.push_str(&format!(
                "  {} {} {}\n",
                call.date,
                call.status,
                call.remark.as_deref().unwrap_or("")
            ));
        }
    }
    Ok(out)
}

/// Handle `add-student`
pub async fn handle_add_student(services: &ServiceFactory, form: StudentForm) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_ADD_STUDENT).await?;

    // Group mentors add students to their own group
    let group_mentor_id = match (form.group_mentor, profile.role()) {
        (Some(id), _) => Some(id),
        (None, Role::GroupMentor) => Some(profile.user.id.clone()),
        (None, _) => None,
    };

    let request = CreateStudentRequest {
        name: form.name,
        class: form.class,
        platform: form.platform,
        contact: ContactNumbers {
            student: form.student_phone,
            parent: form.parent_phone,
            alternate: form.alternate_phone,
        },
        group_mentor_id,
    };
    let ack = services.people_service.add_student(&request).await?;
    logging::log_user_action(&profile.user.id, "add_student", Some(&request.name));
    Ok(ack_text(&ack, &format!("Student {} added", request.name)))
}

/// Handle `edit-student`
pub async fn handle_edit_student(
    services: &ServiceFactory,
    student_id: &str,
    request: UpdateStudentRequest,
) -> Result<String> {
    let profile = services.auth_middleware().require_page(PATH_ADD_STUDENT).await?;
    if request.name.is_none()
        && request.class.is_none()
        && request.platform.is_none()
        && request.contact.is_none()
        && request.group_mentor_id.is_none()
    {
        return Err(PcbPointError::InvalidInput("Nothing to update".to_string()));
    }

    let ack = services.people_service.update_student(student_id, &request).await?;
    logging::log_user_action(&profile.user.id, "update_student", Some(student_id));
    Ok(ack_text(&ack, &format!("Student {} updated", student_id)))
}
