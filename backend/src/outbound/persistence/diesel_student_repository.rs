//! PostgreSQL-backed `StudentRepository` implementation using Diesel ORM.
//!
//! Email uniqueness is backed by the `students_email_key` constraint; a
//! violating write surfaces as `StudentRepositoryError::DuplicateEmail`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{RunQueryDsl, SimpleAsyncConnection};
use tracing::{debug, info};

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{Age, EmailAddress, Student, StudentId, StudentName};

use super::models::{NewStudentRow, StudentChangeset, StudentRow};
use super::pool::{DbPool, PoolError};
use super::schema::students;

const CREATE_STUDENTS_SQL: &str =
    include_str!("../../../migrations/2025-01-06-000000_create_students/up.sql");

/// Diesel-backed implementation of the `StudentRepository` port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `students` table when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns a connection error when no pooled connection is available and
    /// a query error when the DDL fails.
    pub async fn ensure_schema(&self) -> Result<(), StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.batch_execute(CREATE_STUDENTS_SQL)
            .await
            .map_err(map_diesel_error)?;
        info!("students schema ensured");
        Ok(())
    }
}

/// Map pool errors to domain student repository errors.
fn map_pool_error(error: PoolError) -> StudentRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StudentRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain student repository errors.
fn map_diesel_error(error: diesel::result::Error) -> StudentRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StudentRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => StudentRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StudentRepositoryError::connection("database connection error")
        }
        _ => StudentRepositoryError::query("database error"),
    }
}

/// Map errors from writes carrying `email`, recognising the unique constraint.
fn map_write_error(error: diesel::result::Error, email: &EmailAddress) -> StudentRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            debug!(%email, "unique constraint rejected student write");
            StudentRepositoryError::duplicate_email(email.as_str())
        }
        other => map_diesel_error(other),
    }
}

/// Convert a database row to a domain `Student`.
fn row_to_student(row: StudentRow) -> Result<Student, StudentRepositoryError> {
    let invalid = |field: &str, err: &dyn std::fmt::Display| {
        StudentRepositoryError::query(format!(
            "stored student {} has invalid {field}: {err}",
            row.id
        ))
    };

    let id = StudentId::new(row.id).map_err(|err| invalid("id", &err))?;
    let name = StudentName::new(row.name.as_str()).map_err(|err| invalid("name", &err))?;
    let age = Age::new(i64::from(row.age)).map_err(|err| invalid("age", &err))?;
    let gender = row.gender.parse().map_err(|err| invalid("gender", &err))?;
    let email = EmailAddress::new(row.email.as_str()).map_err(|err| invalid("email", &err))?;

    Ok(Student {
        id: Some(id),
        name,
        age,
        gender,
        email,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<StudentRow> = students::table
            .find(id.get())
            .select(StudentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_student).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<StudentRow> = students::table
            .filter(students::email.eq(email.as_str()))
            .select(StudentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_student).transpose()
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            students::table.filter(students::email.eq(email.as_str())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn exists_by_email_excluding(
        &self,
        email: &EmailAddress,
        id: StudentId,
    ) -> Result<bool, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            students::table
                .filter(students::email.eq(email.as_str()))
                .filter(students::id.ne(id.get())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn exists_by_id(&self, id: StudentId) -> Result<bool, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(students::table.find(id.get())))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn save(&self, student: Student) -> Result<Student, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let age = i16::from(student.age.get());

        let row: StudentRow = match student.id {
            None => {
                let new_row = NewStudentRow {
                    name: student.name.as_str(),
                    age,
                    gender: student.gender.as_str(),
                    email: student.email.as_str(),
                    created_at: student.created_at,
                    updated_at: student.updated_at,
                };

                diesel::insert_into(students::table)
                    .values(&new_row)
                    .returning(StudentRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(|err| map_write_error(err, &student.email))?
            }
            Some(id) => {
                let changeset = StudentChangeset {
                    name: student.name.as_str(),
                    age,
                    gender: student.gender.as_str(),
                    email: student.email.as_str(),
                    updated_at: student.updated_at,
                };

                diesel::update(students::table.find(id.get()))
                    .set(&changeset)
                    .returning(StudentRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .optional()
                    .map_err(|err| map_write_error(err, &student.email))?
                    .ok_or_else(|| {
                        StudentRepositoryError::query(format!("no student with id {id} to update"))
                    })?
            }
        };

        row_to_student(row)
    }

    async fn delete_by_id(&self, id: StudentId) -> Result<(), StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(students::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_all(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<StudentRow> = students::table
            .order(students::id.asc())
            .select(StudentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_student).collect()
    }
}
