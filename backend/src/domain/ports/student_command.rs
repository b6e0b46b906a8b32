//! Driving port for student mutations.
//!
//! Inbound adapters run the validation gate first and hand this port typed
//! field sets, so implementations only deal with business rules.

use async_trait::async_trait;

use crate::domain::{Error, NewStudent, StudentId, StudentPatch, StudentView};

/// Driving port for creating, updating and deleting students.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentCommand: Send + Sync {
    /// Create a student.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::Duplicate`] when the email is
    /// already taken.
    async fn create(&self, student: NewStudent) -> Result<StudentView, Error>;

    /// Apply the present fields of `patch` to an existing student.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] for an unknown id and
    /// [`crate::domain::ErrorCode::Duplicate`] when a changed email belongs
    /// to another student.
    async fn update(&self, id: StudentId, patch: StudentPatch) -> Result<StudentView, Error>;

    /// Delete a student.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] for an unknown id.
    async fn delete(&self, id: StudentId) -> Result<(), Error>;
}
