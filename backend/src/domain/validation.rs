//! Validation gate for incoming student field sets.
//!
//! Inputs arrive with every field optional so that a single pass can report
//! all failing fields at once. Creation requires every field; updates only
//! validate the fields that are present.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::student::{
    Age, EmailAddress, Gender, NewStudent, StudentName, StudentPatch, StudentValidationError,
};

/// Violation key for the name field.
pub const FIELD_NAME: &str = "name";
/// Violation key for the age field.
pub const FIELD_AGE: &str = "age";
/// Violation key for the gender field.
pub const FIELD_GENDER: &str = "gender";
/// Violation key for the email field.
pub const FIELD_EMAIL: &str = "email";

/// Field name to violation message. The first message recorded for a field
/// is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldViolations(BTreeMap<String, String>);

impl FieldViolations {
    /// Record a violation unless the field already has one.
    pub fn record(&mut self, field: impl Into<String>, message: impl ToString) {
        self.0
            .entry(field.into())
            .or_insert_with(|| message.to_string());
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Field and message pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// JSON object form used as error details.
    pub fn into_value(self) -> Value {
        Value::Object(
            self.0
                .into_iter()
                .map(|(field, message)| (field, Value::String(message)))
                .collect(),
        )
    }

    fn check<T>(
        &mut self,
        field: &str,
        result: Result<T, StudentValidationError>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.record(field, err);
                None
            }
        }
    }

    fn require(
        &mut self,
        field: &str,
        value: Option<String>,
        missing: StudentValidationError,
    ) -> Option<String> {
        match value.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(raw),
            None => {
                self.record(field, missing);
                None
            }
        }
    }
}

/// Unvalidated creation input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateStudentInput {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub email: Option<String>,
}

impl CreateStudentInput {
    /// Check every field and return the typed field set, or every violation.
    ///
    /// # Examples
    /// ```
    /// use student_registry::domain::CreateStudentInput;
    ///
    /// let input = CreateStudentInput {
    ///     name: Some("Jane Roe".into()),
    ///     age: Some(22),
    ///     gender: Some("OTHER".into()),
    ///     email: Some("jane@x.com".into()),
    /// };
    /// assert!(input.validate().is_ok());
    ///
    /// let violations = CreateStudentInput::default()
    ///     .validate()
    ///     .expect_err("all fields missing");
    /// assert_eq!(violations.len(), 4);
    /// ```
    pub fn validate(self) -> Result<NewStudent, FieldViolations> {
        let mut violations = FieldViolations::default();

        let name = violations
            .require(FIELD_NAME, self.name, StudentValidationError::NameRequired)
            .and_then(|raw| violations.check(FIELD_NAME, StudentName::new(raw)));

        let age = match self.age {
            Some(raw) => violations.check(FIELD_AGE, Age::new(raw)),
            None => {
                violations.record(FIELD_AGE, StudentValidationError::AgeRequired);
                None
            }
        };

        let gender = violations
            .require(FIELD_GENDER, self.gender, StudentValidationError::GenderRequired)
            .and_then(|raw| violations.check(FIELD_GENDER, raw.parse::<Gender>()));

        let email = violations
            .require(FIELD_EMAIL, self.email, StudentValidationError::EmailRequired)
            .and_then(|raw| violations.check(FIELD_EMAIL, EmailAddress::new(raw)));

        match (name, age, gender, email) {
            (Some(name), Some(age), Some(gender), Some(email)) => Ok(NewStudent {
                name,
                age,
                gender,
                email,
            }),
            _ => Err(violations),
        }
    }
}

/// Unvalidated partial update input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateStudentInput {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub email: Option<String>,
}

impl UpdateStudentInput {
    /// Check the present fields and return the typed patch, or every
    /// violation. An input with no fields yields an empty patch.
    pub fn validate(self) -> Result<StudentPatch, FieldViolations> {
        let mut violations = FieldViolations::default();

        // A present name obeys the same rules as on creation, so a
        // whitespace-only name is rejected rather than stored.
        let patch = StudentPatch {
            name: self
                .name
                .and_then(|raw| violations.check(FIELD_NAME, StudentName::new(raw))),
            age: self
                .age
                .and_then(|raw| violations.check(FIELD_AGE, Age::new(raw))),
            gender: self
                .gender
                .and_then(|raw| violations.check(FIELD_GENDER, raw.parse::<Gender>())),
            email: self
                .email
                .and_then(|raw| violations.check(FIELD_EMAIL, EmailAddress::new(raw))),
        };

        if violations.is_empty() {
            Ok(patch)
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
