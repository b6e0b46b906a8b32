//! In-memory `StudentRepository` implementation.
//!
//! Records live in an ordered map behind a mutex, so `find_all` returns them
//! in ascending id order. The uniqueness check and the write happen under the
//! same lock, which makes `save` the authoritative email guard for this
//! store. The lock is never held across an await point.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{EmailAddress, Student, StudentId};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<StudentId, Student>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl Table {
    fn email_taken(&self, email: &EmailAddress, excluding: Option<StudentId>) -> bool {
        self.rows
            .iter()
            .any(|(id, row)| Some(*id) != excluding && row.email == *email)
    }

    fn allocate_id(&mut self) -> Result<StudentId, StudentRepositoryError> {
        let id = StudentId::new(self.next_id)
            .map_err(|err| StudentRepositoryError::query(err.to_string()))?;
        self.next_id += 1;
        Ok(id)
    }
}

/// Process-local student store.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    table: Mutex<Table>,
}

impl InMemoryStudentRepository {
    /// Create an empty store whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        match self.table.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("student table lock was poisoned; continuing with inner state");
                poisoned.into_inner()
            }
        }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self
            .lock()
            .rows
            .values()
            .find(|row| row.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, StudentRepositoryError> {
        Ok(self.lock().email_taken(email, None))
    }

    async fn exists_by_email_excluding(
        &self,
        email: &EmailAddress,
        id: StudentId,
    ) -> Result<bool, StudentRepositoryError> {
        Ok(self.lock().email_taken(email, Some(id)))
    }

    async fn exists_by_id(&self, id: StudentId) -> Result<bool, StudentRepositoryError> {
        Ok(self.lock().rows.contains_key(&id))
    }

    async fn save(&self, mut student: Student) -> Result<Student, StudentRepositoryError> {
        let mut table = self.lock();
        if table.email_taken(&student.email, student.id) {
            return Err(StudentRepositoryError::duplicate_email(
                student.email.as_str(),
            ));
        }

        let id = match student.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => {
                return Err(StudentRepositoryError::query(format!(
                    "no student with id {id} to update"
                )));
            }
            None => table.allocate_id()?,
        };
        student.id = Some(id);
        table.rows.insert(id, student.clone());
        Ok(student)
    }

    async fn delete_by_id(&self, id: StudentId) -> Result<(), StudentRepositoryError> {
        self.lock().rows.remove(&id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        Ok(self.lock().rows.values().cloned().collect())
    }
}
