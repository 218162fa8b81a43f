//! Command handlers module
//!
//! One handler per page. Each checks the route guard, calls its service and
//! returns the rendered page text.

pub mod session;
pub mod people;
pub mod admissions;
pub mod calls;
pub mod fees;
pub mod kits;
pub mod salary;
pub mod syllabus;
pub mod tickets;
pub mod roles;

use clap::Subcommand;

use crate::config::Settings;
use crate::models::{CallStatus, FeeTier, Role, UpdateStudentRequest};
use crate::services::ServiceFactory;
use crate::utils::errors::{PcbPointError, Result};

/// All available pages and actions
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        role: Role,
        #[arg(long)]
        email: String,
        #[arg(long, env = "PCBPOINT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the saved session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Show the pages available to the logged-in user
    Nav,
    /// List supervisors, senior mentors or group mentors
    Staff {
        role: Role,
    },
    /// Add a supervisor, senior mentor or group mentor
    AddStaff {
        role: Role,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long, env = "PCBPOINT_NEW_PASSWORD", hide_env_values = true)]
        password: String,
        /// Id of the supervisor / senior mentor above the new member
        #[arg(long)]
        parent: Option<String>,
    },
    /// List students
    Students,
    /// Show one student
    Student {
        id: String,
    },
    /// Add a student
    AddStudent {
        #[arg(long)]
        name: String,
        #[arg(long)]
        class: String,
        #[arg(long)]
        platform: String,
        #[arg(long)]
        student_phone: String,
        #[arg(long)]
        parent_phone: String,
        #[arg(long)]
        alternate_phone: Option<String>,
        #[arg(long)]
        group_mentor: Option<String>,
    },
    /// Edit a student's details
    EditStudent {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        class: Option<String>,
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        group_mentor: Option<String>,
    },
    /// Print the effective configuration as TOML
    Config,
    /// New admissions
    #[command(subcommand)]
    Admissions(AdmissionsCommand),
    /// Call records
    #[command(subcommand)]
    Calls(CallsCommand),
    /// Fee management
    #[command(subcommand)]
    Fees(FeesCommand),
    /// Kit dispatch
    #[command(subcommand)]
    Kits(KitsCommand),
    /// Mentor salaries
    #[command(subcommand)]
    Salary(SalaryCommand),
    /// Syllabus progress
    #[command(subcommand)]
    Syllabus(SyllabusCommand),
    /// Support tickets
    #[command(subcommand)]
    Tickets(TicketsCommand),
    /// Supervisor feature permissions
    #[command(subcommand)]
    Roles(RolesCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AdmissionsCommand {
    /// List pending admissions
    List,
    /// Approve an admission under a group mentor
    Approve {
        id: String,
        #[arg(long)]
        group_mentor: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CallsCommand {
    /// Weekly call-status grid
    Week {
        /// Any day of the week to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Record a call outcome
    Set {
        student: String,
        /// YYYY-MM-DD
        date: String,
        status: CallStatus,
        /// The call was with the parent
        #[arg(long)]
        parent: bool,
        #[arg(long)]
        remark: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum FeesCommand {
    /// Fee status of every student
    List,
    /// Fee plan and payments for one student
    Show {
        student: String,
    },
    /// Record a payment
    Pay {
        student: String,
        amount: u64,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        mode: Option<String>,
        #[arg(long)]
        reference: Option<String>,
    },
    /// Set the fee plan
    Plan {
        student: String,
        tier: FeeTier,
        total: u64,
        #[arg(long, default_value_t = 1)]
        installments: u8,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum KitsCommand {
    List,
    Ready {
        student: String,
    },
    Dispatch {
        student: String,
        tracking_id: String,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SalaryCommand {
    List {
        /// YYYY-MM, defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
    Paid {
        id: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SyllabusCommand {
    Show,
    Done {
        topic: String,
    },
    Undo {
        topic: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TicketsCommand {
    List,
    Raise {
        subject: String,
        #[arg(long)]
        description: Option<String>,
        /// URL of an uploaded voice note
        #[arg(long)]
        audio: Option<String>,
    },
    Resolve {
        id: String,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum RolesCommand {
    Show {
        supervisor: String,
    },
    Set {
        supervisor: String,
        #[arg(long)]
        fee_management: bool,
        #[arg(long)]
        kit_dispatch: bool,
    },
}

/// Main command dispatcher
pub async fn handle_command(services: &ServiceFactory, command: Command) -> Result<String> {
    match command {
        Command::Login { role, email, password } => session::handle_login(services, role, &email, &password).await,
        Command::Logout => session::handle_logout(services).await,
        Command::Whoami => session::handle_whoami(services).await,
        Command::Nav => session::handle_nav(services).await,
        Command::Staff { role } => people::handle_staff_list(services, role).await,
        Command::AddStaff { role, name, email, phone, password, parent } => {
            people::handle_add_staff(services, role, name, email, phone, password, parent).await
        }
        Command::Students => people::handle_students(services).await,
        Command::Student { id } => people::handle_student_detail(services, &id).await,
        Command::AddStudent { name, class, platform, student_phone, parent_phone, alternate_phone, group_mentor } => {
            let form = people::StudentForm {
                name,
                class,
                platform,
                student_phone,
                parent_phone,
                alternate_phone,
                group_mentor,
            };
            people::handle_add_student(services, form).await
        }
        Command::EditStudent { id, name, class, platform, group_mentor } => {
            let request = UpdateStudentRequest {
                name,
                class,
                platform,
                contact: None,
                group_mentor_id: group_mentor,
            };
            people::handle_edit_student(services, &id, request).await
        }
        Command::Config => render_config(&services.settings),
        Command::Admissions(AdmissionsCommand::List) => admissions::handle_admissions(services).await,
        Command::Admissions(AdmissionsCommand::Approve { id, group_mentor }) => {
            admissions::handle_approve(services, &id, &group_mentor).await
        }
        Command::Calls(CallsCommand::Week { date }) => calls::handle_week(services, date.as_deref()).await,
        Command::Calls(CallsCommand::Set { student, date, status, parent, remark }) => {
            calls::handle_set(services, &student, &date, status, parent, remark).await
        }
        Command::Fees(FeesCommand::List) => fees::handle_fee_list(services).await,
        Command::Fees(FeesCommand::Show { student }) => fees::handle_fee_detail(services, &student).await,
        Command::Fees(FeesCommand::Pay { student, amount, date, mode, reference }) => {
            fees::handle_payment(services, &student, amount, date.as_deref(), mode, reference).await
        }
        Command::Fees(FeesCommand::Plan { student, tier, total, installments }) => {
            fees::handle_set_plan(services, &student, tier, total, installments).await
        }
        Command::Kits(KitsCommand::List) => kits::handle_kits(services).await,
        Command::Kits(KitsCommand::Ready { student }) => kits::handle_ready(services, &student).await,
        Command::Kits(KitsCommand::Dispatch { student, tracking_id, date }) => {
            kits::handle_dispatch(services, &student, &tracking_id, date.as_deref()).await
        }
        Command::Salary(SalaryCommand::List { month }) => salary::handle_salaries(services, month.as_deref()).await,
        Command::Salary(SalaryCommand::Paid { id }) => salary::handle_mark_paid(services, &id).await,
        Command::Syllabus(SyllabusCommand::Show) => syllabus::handle_syllabus(services).await,
        Command::Syllabus(SyllabusCommand::Done { topic }) => syllabus::handle_topic(services, &topic, true).await,
        Command::Syllabus(SyllabusCommand::Undo { topic }) => syllabus::handle_topic(services, &topic, false).await,
        Command::Tickets(TicketsCommand::List) => tickets::handle_tickets(services).await,
        Command::Tickets(TicketsCommand::Raise { subject, description, audio }) => {
            tickets::handle_raise(services, &subject, description, audio).await
        }
        Command::Tickets(TicketsCommand::Resolve { id }) => tickets::handle_resolve(services, &id).await,
        Command::Roles(RolesCommand::Show { supervisor }) => roles::handle_show(services, &supervisor).await,
        Command::Roles(RolesCommand::Set { supervisor, fee_management, kit_dispatch }) => {
            roles::handle_set(services, &supervisor, fee_management, kit_dispatch).await
        }
    }
}

/// Effective settings after file and environment layering
pub fn render_config(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings)
        .map_err(|e| PcbPointError::Config(format!("Cannot render settings: {}", e)))
}

/// Success line for a write action, preferring the server's own wording
pub(crate) fn ack_text(ack: &crate::services::Ack, fallback: &str) -> String {
    match &ack.message {
        Some(message) if !message.trim().is_empty() => format!("{}\n", message.trim()),
        _ => format!("{}\n", fallback),
    }
}
