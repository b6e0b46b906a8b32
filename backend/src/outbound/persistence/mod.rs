//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the Diesel-backed [`DieselStudentRepository`] with async support
//! through `diesel-async` and `bb8` connection pooling.
//!
//! - Row structs (`models.rs`) and the table definition (`schema.rs`) stay
//!   private to this module; only domain types cross the port.
//! - Database failures are mapped to `StudentRepositoryError` variants.
//!
//! ```ignore
//! use student_registry::outbound::persistence::{DbPool, DieselStudentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/students")).await?;
//! let repo = DieselStudentRepository::new(pool);
//! repo.ensure_schema().await?;
//! ```

mod diesel_student_repository;
mod models;
mod pool;
mod schema;

pub use diesel_student_repository::DieselStudentRepository;
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
