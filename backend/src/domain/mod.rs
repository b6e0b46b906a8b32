//! Domain model for student records.
//!
//! Purpose: hold the entities, the validation gate, the error taxonomy and
//! the service that enforces the record invariants. Nothing here knows about
//! HTTP or SQL; adapters reach the domain only through [`ports`].
//!
//! Public surface:
//! - Error (alias: `DomainError`) and [`ErrorCode`]: transport-agnostic failures.
//! - [`Student`], [`StudentView`] and the validated field newtypes.
//! - [`CreateStudentInput`], [`UpdateStudentInput`] and [`FieldViolations`]:
//!   the validation gate.
//! - [`StudentService`]: implements the driving ports.
//! - [`TraceId`]: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod student;
pub mod student_service;
pub mod trace_id;
pub mod validation;

pub use self::error::{Error, ErrorCode, ErrorValidationError, VALIDATION_FAILED_MESSAGE};
pub use self::student::{
    Age, EmailAddress, Gender, NewStudent, Student, StudentId, StudentName, StudentPatch,
    StudentValidationError, StudentView,
};
pub use self::student_service::StudentService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{CreateStudentInput, FieldViolations, UpdateStudentInput};

/// Convenient alias for the domain error type.
pub type DomainError = Error;
