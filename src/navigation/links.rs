//! Static navigation table

use crate::models::Role;

use Role::{Admin, GroupMentor, SeniorMentor, Supervisor};

/// A page reachable from the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub roles: &'static [Role],
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Supervisor feature permission that unlocks an extra page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    FeeManagement,
    KitDispatch,
}

/// A link only shown to supervisors holding a feature permission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatedLink {
    pub feature: Feature,
    pub link: NavLink,
}

pub const PATH_DASHBOARD: &str = "/dashboard";
pub const PATH_SUPERVISORS: &str = "/supervisors";
pub const PATH_ADD_SUPERVISOR: &str = "/supervisors/add";
pub const PATH_SENIOR_MENTORS: &str = "/senior-mentors";
pub const PATH_ADD_SENIOR_MENTOR: &str = "/senior-mentors/add";
pub const PATH_GROUP_MENTORS: &str = "/group-mentors";
pub const PATH_ADD_GROUP_MENTOR: &str = "/group-mentors/add";
pub const PATH_STUDENTS: &str = "/students";
pub const PATH_ADD_STUDENT: &str = "/students/add";
pub const PATH_ADMISSIONS: &str = "/admissions";
pub const PATH_CALLS: &str = "/calls";
pub const PATH_FEES: &str = "/fees";
pub const PATH_KITS: &str = "/kits";
pub const PATH_SALARY: &str = "/salary";
pub const PATH_SYLLABUS: &str = "/syllabus";
pub const PATH_TICKETS: &str = "/tickets";
pub const PATH_RAISE_TICKET: &str = "/tickets/raise";
pub const PATH_ROLES: &str = "/roles";

const EVERYONE: &[Role] = &[Admin, Supervisor, SeniorMentor, GroupMentor];

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { roles: EVERYONE, label: "Dashboard", path: PATH_DASHBOARD },
    NavLink { roles: &[Admin], label: "Supervisors", path: PATH_SUPERVISORS },
    NavLink { roles: &[Admin], label: "Add Supervisor", path: PATH_ADD_SUPERVISOR },
    NavLink { roles: &[Admin, Supervisor], label: "Senior Mentors", path: PATH_SENIOR_MENTORS },
    NavLink { roles: &[Admin, Supervisor], label: "Add Senior Mentor", path: PATH_ADD_SENIOR_MENTOR },
    NavLink { roles: &[Admin, Supervisor, SeniorMentor], label: "Group Mentors", path: PATH_GROUP_MENTORS },
    NavLink { roles: &[Admin, Supervisor, SeniorMentor], label: "Add Group Mentor", path: PATH_ADD_GROUP_MENTOR },
    NavLink { roles: EVERYONE, label: "Students", path: PATH_STUDENTS },
    NavLink { roles: &[Admin, GroupMentor], label: "Add Student", path: PATH_ADD_STUDENT },
    NavLink { roles: &[Admin, Supervisor], label: "New Admissions", path: PATH_ADMISSIONS },
    NavLink { roles: &[Admin, Supervisor, SeniorMentor, GroupMentor], label: "Call Records", path: PATH_CALLS },
    NavLink { roles: &[Admin], label: "Fee Management", path: PATH_FEES },
    NavLink { roles: &[Admin], label: "Kit Dispatch", path: PATH_KITS },
    NavLink { roles: &[Admin, SeniorMentor, GroupMentor], label: "Salary", path: PATH_SALARY },
    NavLink { roles: &[Admin, GroupMentor], label: "Syllabus", path: PATH_SYLLABUS },
    NavLink { roles: &[Admin], label: "Tickets", path: PATH_TICKETS },
    NavLink { roles: &[Supervisor, SeniorMentor, GroupMentor], label: "Raise Ticket", path: PATH_RAISE_TICKET },
    NavLink { roles: &[Admin], label: "Roles & Permissions", path: PATH_ROLES },
];

pub static GATED_LINKS: &[GatedLink] = &[
    GatedLink {
        feature: Feature::FeeManagement,
        link: NavLink { roles: &[Supervisor], label: "Fee Management", path: PATH_FEES },
    },
    GatedLink {
        feature: Feature::KitDispatch,
        link: NavLink { roles: &[Supervisor], label: "Kit Dispatch", path: PATH_KITS },
    },
];
