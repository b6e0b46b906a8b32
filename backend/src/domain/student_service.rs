//! Student domain service.
//!
//! Implements the driving ports on top of a [`StudentRepository`]. The
//! service enforces email uniqueness before writing, merges partial updates
//! field by field and stamps timestamps from the injected clock. It keeps no
//! state of its own, so one instance serves every request.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    StudentCommand, StudentQuery, StudentRepository, StudentRepositoryError,
};
use crate::domain::{
    EmailAddress, Error, NewStudent, Student, StudentId, StudentPatch, StudentView,
};

/// Student service implementing [`StudentCommand`] and [`StudentQuery`].
#[derive(Clone)]
pub struct StudentService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> StudentService<R> {
    /// Create a new service over `repo`, reading time from `clock`.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use student_registry::domain::StudentService;
    /// use student_registry::outbound::memory::InMemoryStudentRepository;
    ///
    /// let service = StudentService::new(
    ///     Arc::new(InMemoryStudentRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn not_found_by_id(id: StudentId) -> Error {
    Error::not_found(format!("Student not found with id: {id}"))
}

fn not_found_by_email(email: &str) -> Error {
    Error::not_found(format!("Student not found with email: {email}"))
}

fn duplicate_email(email: &str) -> Error {
    Error::duplicate(format!("Student with email {email} already exists"))
}

fn map_repository_error(error: StudentRepositoryError) -> Error {
    match error {
        StudentRepositoryError::DuplicateEmail { email } => duplicate_email(&email),
        other @ (StudentRepositoryError::Connection { .. }
        | StudentRepositoryError::Query { .. }) => Error::unexpected(other),
    }
}

impl<R> StudentService<R>
where
    R: StudentRepository,
{
    async fn load(&self, id: StudentId) -> Result<Student, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found_by_id(id))
    }

    /// Fail with a duplicate error when another student already holds the
    /// email. Runs before any field of the target is touched.
    async fn ensure_email_free_for(&self, email: &EmailAddress, id: StudentId) -> Result<(), Error> {
        let taken = self
            .repo
            .exists_by_email_excluding(email, id)
            .await
            .map_err(map_repository_error)?;
        if taken {
            debug!(student_id = %id, %email, "update rejected: email belongs to another student");
            return Err(duplicate_email(email.as_str()));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> StudentCommand for StudentService<R>
where
    R: StudentRepository,
{
    async fn create(&self, student: NewStudent) -> Result<StudentView, Error> {
        let taken = self
            .repo
            .exists_by_email(&student.email)
            .await
            .map_err(map_repository_error)?;
        if taken {
            debug!(email = %student.email, "create rejected: email already exists");
            return Err(duplicate_email(student.email.as_str()));
        }

        let record = Student::new(student, self.clock.utc());
        let saved = self.repo.save(record).await.map_err(map_repository_error)?;
        let view = StudentView::try_from(saved)?;
        info!(student_id = view.id, email = %view.email, "student created");
        Ok(view)
    }

    async fn update(&self, id: StudentId, patch: StudentPatch) -> Result<StudentView, Error> {
        let mut student = self.load(id).await?;
        let StudentPatch {
            name,
            age,
            gender,
            email,
        } = patch;

        if let Some(email) = email
            && email != student.email
        {
            self.ensure_email_free_for(&email, id).await?;
            student.email = email;
        }
        if let Some(name) = name {
            student.name = name;
        }
        if let Some(age) = age {
            student.age = age;
        }
        if let Some(gender) = gender {
            student.gender = gender;
        }
        student.updated_at = self.clock.utc();

        let saved = self.repo.save(student).await.map_err(map_repository_error)?;
        let view = StudentView::try_from(saved)?;
        info!(student_id = view.id, "student updated");
        Ok(view)
    }

    async fn delete(&self, id: StudentId) -> Result<(), Error> {
        let exists = self
            .repo
            .exists_by_id(id)
            .await
            .map_err(map_repository_error)?;
        if !exists {
            debug!(student_id = %id, "delete rejected: student not found");
            return Err(not_found_by_id(id));
        }
        self.repo
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)?;
        info!(student_id = %id, "student deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> StudentQuery for StudentService<R>
where
    R: StudentRepository,
{
    async fn get_all(&self) -> Result<Vec<StudentView>, Error> {
        let students = self.repo.find_all().await.map_err(map_repository_error)?;
        students.into_iter().map(StudentView::try_from).collect()
    }

    async fn get_by_id(&self, id: StudentId) -> Result<StudentView, Error> {
        let student = self.load(id).await?;
        StudentView::try_from(student)
    }

    async fn get_by_email(&self, email: &str) -> Result<StudentView, Error> {
        let Ok(address) = EmailAddress::new(email) else {
            debug!(email, "lookup skipped: text is not an email address");
            return Err(not_found_by_email(email));
        };
        let student = self
            .repo
            .find_by_email(&address)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found_by_email(email))?;
        StudentView::try_from(student)
    }
}

#[cfg(test)]
#[path = "student_service_tests.rs"]
mod tests;
