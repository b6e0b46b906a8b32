//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`StudentCommand`], [`StudentQuery`]) are what inbound
//! adapters call. The driven port ([`StudentRepository`]) is what storage
//! adapters implement; its failures are a closed error enum so the service
//! can map them predictably.

mod macros;
pub(crate) use macros::define_port_error;

mod student_command;
mod student_query;
mod student_repository;

#[cfg(test)]
pub use student_command::MockStudentCommand;
pub use student_command::StudentCommand;
#[cfg(test)]
pub use student_query::MockStudentQuery;
pub use student_query::StudentQuery;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
