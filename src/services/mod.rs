//! Services module
//!
//! One service per API area, all sharing a single [`ApiClient`] and the
//! session's token cell.

pub mod api;
pub mod auth;
pub mod admissions;
pub mod calls;
pub mod fees;
pub mod kits;
pub mod people;
pub mod salary;
pub mod syllabus;
pub mod tickets;

// Re-export commonly used services
pub use api::{ApiClient, Ack};
pub use auth::AuthService;
pub use admissions::AdmissionService;
pub use calls::CallService;
pub use fees::FeeService;
pub use kits::KitService;
pub use people::PeopleService;
pub use salary::SalaryService;
pub use syllabus::SyllabusService;
pub use tickets::TicketService;

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::middleware::AuthMiddleware;
use crate::state::{SessionState, TokenCell, TokenStore};
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub settings: Settings,
    pub session: Arc<SessionState>,
    pub auth_service: AuthService,
    pub people_service: PeopleService,
    pub admission_service: AdmissionService,
    pub call_service: CallService,
    pub fee_service: FeeService,
    pub kit_service: KitService,
    pub salary_service: SalaryService,
    pub syllabus_service: SyllabusService,
    pub ticket_service: TicketService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        let token = TokenCell::new();
        let api = ApiClient::new(&settings.api, token.clone())?;
        let store = TokenStore::new(settings.session.token_path.clone());

        let auth_service = AuthService::new(api.clone());
        let session = Arc::new(SessionState::new(auth_service.clone(), store, token));

        Ok(Self {
            people_service: PeopleService::new(api.clone()),
            admission_service: AdmissionService::new(api.clone()),
            call_service: CallService::new(api.clone()),
            fee_service: FeeService::new(api.clone()),
            kit_service: KitService::new(api.clone()),
            salary_service: SalaryService::new(api.clone()),
            syllabus_service: SyllabusService::new(api.clone(), session.clone(), settings.features.syllabus_cache),
            ticket_service: TicketService::new(api),
            auth_service,
            session,
            settings,
        })
    }

    /// Get the route guard
    pub fn auth_middleware(&self) -> AuthMiddleware {
        AuthMiddleware::new(self.session.clone(), self.settings.features.permission_links)
    }
}
