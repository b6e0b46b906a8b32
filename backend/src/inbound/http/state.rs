//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{StudentCommand, StudentQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub students: Arc<dyn StudentCommand>,
    pub students_query: Arc<dyn StudentQuery>,
}

impl HttpState {
    /// State over separate command and query implementations.
    pub fn new(students: Arc<dyn StudentCommand>, students_query: Arc<dyn StudentQuery>) -> Self {
        Self {
            students,
            students_query,
        }
    }

    /// Construct state where one service backs both ports.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use student_registry::domain::StudentService;
    /// use student_registry::inbound::http::state::HttpState;
    /// use student_registry::outbound::memory::InMemoryStudentRepository;
    ///
    /// let service = StudentService::new(
    ///     Arc::new(InMemoryStudentRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::from_service(Arc::new(service));
    /// # let _ = state;
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: StudentCommand + StudentQuery + 'static,
    {
        Self {
            students: service.clone(),
            students_query: service,
        }
    }
}
