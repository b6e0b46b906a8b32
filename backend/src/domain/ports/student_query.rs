//! Driving port for student reads.

use async_trait::async_trait;

use crate::domain::{Error, StudentId, StudentView};

/// Read-side use-cases over stored students.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentQuery: Send + Sync {
    /// Every student in store order.
    async fn get_all(&self) -> Result<Vec<StudentView>, Error>;

    /// A single student, or [`crate::domain::ErrorCode::NotFound`].
    async fn get_by_id(&self, id: StudentId) -> Result<StudentView, Error>;

    /// A single student by exact email, or
    /// [`crate::domain::ErrorCode::NotFound`]. Text that is not a valid
    /// address can never match.
    async fn get_by_email(&self, email: &str) -> Result<StudentView, Error>;
}
