//! Port for student persistence.
//!
//! The [`StudentRepository`] trait is the contract storage adapters fulfil.
//! Email uniqueness is enforced by the store itself: a conflicting write
//! fails with [`StudentRepositoryError::DuplicateEmail`] even when the
//! service's pre-check raced with another request.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Student, StudentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "student repository connection failed: {message}",
        /// A read or write was rejected by the store.
        Query { message: String } =>
            "student repository query failed: {message}",
        /// The store refused a write because the email is already taken.
        DuplicateEmail { email: String } =>
            "student email already stored: {email}",
    }
}

/// Port for student storage and retrieval.
///
/// Lookups by email compare the stored text exactly. [`Self::save`] inserts
/// a record whose `id` is `None` (assigning one) and replaces the stored
/// record otherwise; both return the record as stored.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Fetch a student by identifier.
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Fetch a student by exact email.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Student>, StudentRepositoryError>;

    /// Whether any student holds `email`.
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, StudentRepositoryError>;

    /// Whether a student other than `id` holds `email`.
    async fn exists_by_email_excluding(
        &self,
        email: &EmailAddress,
        id: StudentId,
    ) -> Result<bool, StudentRepositoryError>;

    /// Whether a student with `id` exists.
    async fn exists_by_id(&self, id: StudentId) -> Result<bool, StudentRepositoryError>;

    /// Insert or replace a student.
    ///
    /// # Errors
    ///
    /// Returns [`StudentRepositoryError::DuplicateEmail`] when another record
    /// already holds the email, and [`StudentRepositoryError::Query`] when an
    /// update targets a record that no longer exists.
    async fn save(&self, student: Student) -> Result<Student, StudentRepositoryError>;

    /// Remove a student permanently. Removing an absent id is not an error.
    async fn delete_by_id(&self, id: StudentId) -> Result<(), StudentRepositoryError>;

    /// Every stored student in store order.
    async fn find_all(&self) -> Result<Vec<Student>, StudentRepositoryError>;
}
