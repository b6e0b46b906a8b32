//! Builders wiring the student store behind the HTTP ports.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::{info, warn};

use student_registry::domain::StudentService;
use student_registry::inbound::http::state::HttpState;
use student_registry::outbound::memory::InMemoryStudentRepository;
use student_registry::outbound::persistence::{DbPool, DieselStudentRepository};

use super::ServerConfig;

/// Build the HTTP state over PostgreSQL when a pool is configured, otherwise
/// over the in-memory store.
///
/// # Errors
/// Returns [`std::io::Error`] when the `students` table cannot be ensured.
pub(crate) async fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    match &config.db_pool {
        Some(pool) => build_postgres_state(pool.clone()).await,
        None => {
            warn!("no database configured; student records will not survive a restart");
            Ok(build_memory_state())
        }
    }
}

async fn build_postgres_state(pool: DbPool) -> std::io::Result<HttpState> {
    let repo = DieselStudentRepository::new(pool);
    repo.ensure_schema()
        .await
        .map_err(|err| std::io::Error::other(format!("student schema setup failed: {err}")))?;
    info!("student records backed by PostgreSQL");
    let service = StudentService::new(Arc::new(repo), Arc::new(DefaultClock));
    Ok(HttpState::from_service(Arc::new(service)))
}

fn build_memory_state() -> HttpState {
    let service = StudentService::new(
        Arc::new(InMemoryStudentRepository::new()),
        Arc::new(DefaultClock),
    );
    HttpState::from_service(Arc::new(service))
}
