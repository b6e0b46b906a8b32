//! Student data model.
//!
//! Field newtypes validate on construction, so a [`Student`] assembled from
//! them always satisfies the record constraints. The store assigns the
//! [`StudentId`]; a record that has not been saved yet carries `None`.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Error;

/// Validation errors returned by the student field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    /// Identifier is not a positive integer.
    InvalidId,
    /// Name absent on creation.
    NameRequired,
    /// Name is empty or whitespace only.
    NameBlank,
    /// Name length outside `min..=max` characters.
    NameLength { min: usize, max: usize },
    /// Age absent on creation.
    AgeRequired,
    /// Age below `min`.
    AgeTooLow { min: u8 },
    /// Age above `max`.
    AgeTooHigh { max: u8 },
    /// Gender absent on creation.
    GenderRequired,
    /// Gender is not one of the accepted spellings.
    InvalidGender,
    /// Email absent on creation.
    EmailRequired,
    /// Email does not have a valid address shape.
    InvalidEmail,
}

impl fmt::Display for StudentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "Student id must be a positive integer"),
            Self::NameRequired => write!(f, "Name is required"),
            Self::NameBlank => write!(f, "Name must not be blank"),
            Self::NameLength { min, max } => {
                write!(f, "Name must be between {min} and {max} characters")
            }
            Self::AgeRequired => write!(f, "Age is required"),
            Self::AgeTooLow { min } => write!(f, "Age must be at least {min}"),
            Self::AgeTooHigh { max } => write!(f, "Age must not exceed {max}"),
            Self::GenderRequired => write!(f, "Gender is required"),
            Self::InvalidGender => write!(f, "Gender must be MALE, FEMALE, or OTHER"),
            Self::EmailRequired => write!(f, "Email is required"),
            Self::InvalidEmail => write!(f, "Email must be valid"),
        }
    }
}

impl std::error::Error for StudentValidationError {}

/// Store-assigned student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(i64);

impl StudentId {
    /// Validate and construct a [`StudentId`]. Identifiers are positive.
    pub fn new(id: i64) -> Result<Self, StudentValidationError> {
        if id < 1 {
            return Err(StudentValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Raw numeric value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = StudentValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| StudentValidationError::InvalidId)?;
        Self::new(raw)
    }
}

/// Minimum allowed length for a student name, in characters.
pub const NAME_MIN: usize = 2;
/// Maximum allowed length for a student name, in characters.
pub const NAME_MAX: usize = 100;

/// Student full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentName(String);

impl StudentName {
    /// Validate and construct a [`StudentName`].
    pub fn new(name: impl Into<String>) -> Result<Self, StudentValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StudentValidationError::NameBlank);
        }
        let length = name.chars().count();
        if !(NAME_MIN..=NAME_MAX).contains(&length) {
            return Err(StudentValidationError::NameLength {
                min: NAME_MIN,
                max: NAME_MAX,
            });
        }
        Ok(Self(name))
    }

    /// Name as entered.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Youngest accepted age.
pub const AGE_MIN: u8 = 1;
/// Oldest accepted age.
pub const AGE_MAX: u8 = 150;

/// Age in whole years, within [`AGE_MIN`]..=[`AGE_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    /// Validate and construct an [`Age`] from any integer input.
    pub fn new(age: i64) -> Result<Self, StudentValidationError> {
        if age < i64::from(AGE_MIN) {
            return Err(StudentValidationError::AgeTooLow { min: AGE_MIN });
        }
        if age > i64::from(AGE_MAX) {
            return Err(StudentValidationError::AgeTooHigh { max: AGE_MAX });
        }
        u8::try_from(age)
            .map(Self)
            .map_err(|_| StudentValidationError::AgeTooHigh { max: AGE_MAX })
    }

    /// Age in years.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of accepted gender values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Wire and storage spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = StudentValidationError;

    /// Parse the exact upper-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            "OTHER" => Ok(Self::Other),
            _ => Err(StudentValidationError::InvalidGender),
        }
    }
}

/// Maximum length of the part before `@`, in bytes.
pub const EMAIL_LOCAL_MAX: usize = 64;
/// Maximum length of the part after `@`, in bytes.
pub const EMAIL_DOMAIN_MAX: usize = 255;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local part: dot-separated atoms of atext. Domain: dot-separated
        // labels that start and end alphanumeric. Lengths are checked
        // separately.
        let atom = r"[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+";
        let label = r"[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?";
        let pattern = format!(r"^{atom}(?:\.{atom})*@{label}(?:\.{label})*$");
        Regex::new(&pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address, compared exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, StudentValidationError> {
        let email = email.into();
        let Some((local, domain)) = email.split_once('@') else {
            return Err(StudentValidationError::InvalidEmail);
        };
        if domain.contains('@')
            || local.len() > EMAIL_LOCAL_MAX
            || domain.len() > EMAIL_DOMAIN_MAX
            || !email_regex().is_match(&email)
        {
            return Err(StudentValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }

    /// Address as entered.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated field set for a new student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: StudentName,
    pub age: Age,
    pub gender: Gender,
    pub email: EmailAddress,
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<StudentName>,
    pub age: Option<Age>,
    pub gender: Option<Gender>,
    pub email: Option<EmailAddress>,
}

/// Student record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: Option<StudentId>,
    pub name: StudentName,
    pub age: Age,
    pub gender: Gender,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Build an unsaved record whose timestamps both equal `now`.
    pub fn new(fields: NewStudent, now: DateTime<Utc>) -> Self {
        let NewStudent {
            name,
            age,
            gender,
            email,
        } = fields;
        Self {
            id: None,
            name,
            age,
            gender,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Read-only projection of a saved [`Student`] returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub id: i64,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Student> for StudentView {
    type Error = Error;

    /// Fails when the record was never saved, which no store should return.
    fn try_from(student: Student) -> Result<Self, Self::Error> {
        let Some(id) = student.id else {
            return Err(Error::unexpected("stored student is missing its identifier"));
        };
        Ok(Self {
            id: id.get(),
            name: student.name.as_str().to_owned(),
            age: student.age.get(),
            gender: student.gender,
            email: student.email.as_str().to_owned(),
            created_at: student.created_at,
            updated_at: student.updated_at,
        })
    }
}

#[cfg(test)]
#[path = "student_tests.rs"]
mod tests;
