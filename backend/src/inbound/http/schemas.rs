//! OpenAPI schema definitions for domain types and the response envelope.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their JSON shape and exist only for documentation.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Gender`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Gender)]
pub enum GenderSchema {
    #[schema(rename = "MALE")]
    Male,
    #[schema(rename = "FEMALE")]
    Female,
    #[schema(rename = "OTHER")]
    Other,
}

/// OpenAPI schema for [`crate::domain::StudentView`].
#[derive(ToSchema)]
#[schema(as = crate::domain::StudentView, rename_all = "camelCase")]
pub struct StudentSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Jane Roe", min_length = 2, max_length = 100)]
    pub name: String,
    #[schema(example = 22, minimum = 1, maximum = 150)]
    pub age: u8,
    pub gender: GenderSchema,
    #[schema(example = "jane@x.com", format = "email")]
    pub email: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

/// Envelope wrapping a single student.
#[derive(ToSchema)]
pub struct StudentEnvelopeSchema {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Student retrieved successfully")]
    pub message: String,
    pub data: Option<StudentSchema>,
    #[schema(format = "date-time")]
    pub timestamp: String,
}

/// Envelope wrapping every student.
#[derive(ToSchema)]
pub struct StudentListEnvelopeSchema {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Students retrieved successfully")]
    pub message: String,
    pub data: Option<Vec<StudentSchema>>,
    #[schema(format = "date-time")]
    pub timestamp: String,
}

/// Envelope returned on failure or when there is no payload.
///
/// For validation failures `data` maps each failing field to its message.
#[derive(ToSchema)]
pub struct EmptyEnvelopeSchema {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Student not found with id: 1")]
    pub message: String,
    #[schema(value_type = Option<Object>, example = json!({"email": "Email must be valid"}))]
    pub data: Option<serde_json::Value>,
    #[schema(format = "date-time")]
    pub timestamp: String,
}
