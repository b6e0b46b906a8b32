//! Student HTTP handlers.
//!
//! ```text
//! POST   /api/students
//! GET    /api/students
//! GET    /api/students/{id}
//! PUT    /api/students/{id}
//! DELETE /api/students/{id}
//! GET    /api/students/email/{email}
//! ```
//!
//! Bodies go through the validation gate before reaching the driving ports;
//! every response, including failures, is an [`ApiResponse`] envelope.

use actix_web::{HttpResponse, Scope, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{CreateStudentInput, Error, StudentId, StudentView, UpdateStudentInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::{
    EmptyEnvelopeSchema, StudentEnvelopeSchema, StudentListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

/// Message for a successful create.
pub const STUDENT_CREATED: &str = "Student created successfully";
/// Message for a successful listing.
pub const STUDENTS_RETRIEVED: &str = "Students retrieved successfully";
/// Message for a successful single lookup.
pub const STUDENT_RETRIEVED: &str = "Student retrieved successfully";
/// Message for a successful update.
pub const STUDENT_UPDATED: &str = "Student updated successfully";
/// Message for a successful delete.
pub const STUDENT_DELETED: &str = "Student deleted successfully";

/// Request payload for creating a student. Every field is required; they are
/// optional here so that all missing fields are reported together.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequestBody {
    #[schema(example = "Jane Roe")]
    pub name: Option<String>,
    #[schema(example = 22)]
    pub age: Option<i64>,
    #[schema(example = "OTHER")]
    pub gender: Option<String>,
    #[schema(example = "jane@x.com")]
    pub email: Option<String>,
}

impl From<CreateStudentRequestBody> for CreateStudentInput {
    fn from(value: CreateStudentRequestBody) -> Self {
        Self {
            name: value.name,
            age: value.age,
            gender: value.gender,
            email: value.email,
        }
    }
}

/// Request payload for a partial update. Absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequestBody {
    pub name: Option<String>,
    #[schema(example = 23)]
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateStudentRequestBody> for UpdateStudentInput {
    fn from(value: UpdateStudentRequestBody) -> Self {
        Self {
            name: value.name,
            age: value.age,
            gender: value.gender,
            email: value.email,
        }
    }
}

fn parse_student_id(raw: &str) -> Result<StudentId, Error> {
    raw.parse()
        .map_err(|err| Error::invalid_input(format!("Invalid student id '{raw}': {err}")))
}

/// JSON extractor configuration turning unreadable bodies into
/// `InvalidInput` envelopes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected unreadable student payload");
        Error::invalid_input(format!("Malformed request body: {err}")).into()
    })
}

/// Scope mounting every student handler under `/api/students`.
pub fn students_scope() -> Scope {
    web::scope("/api/students")
        .app_data(json_config())
        .service(create_student)
        .service(list_students)
        .service(get_student_by_email)
        .service(get_student)
        .service(update_student)
        .service(delete_student)
}

/// Create a student.
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequestBody,
    responses(
        (status = 201, description = "Student created", body = StudentEnvelopeSchema),
        (status = 400, description = "Validation failed or malformed body", body = EmptyEnvelopeSchema),
        (status = 409, description = "Email already exists", body = EmptyEnvelopeSchema),
        (status = 500, description = "Unexpected failure", body = EmptyEnvelopeSchema)
    ),
    tags = ["students"],
    operation_id = "createStudent"
)]
#[post("")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: web::Json<CreateStudentRequestBody>,
) -> ApiResult<HttpResponse> {
    let student = CreateStudentInput::from(payload.into_inner()).validate()?;
    let view = state.students.create(student).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(STUDENT_CREATED, view)))
}

/// List every student.
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students", body = StudentListEnvelopeSchema),
        (status = 500, description = "Unexpected failure", body = EmptyEnvelopeSchema)
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("")]
pub async fn list_students(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ApiResponse<Vec<StudentView>>>> {
    let students = state.students_query.get_all().await?;
    Ok(web::Json(ApiResponse::success(STUDENTS_RETRIEVED, students)))
}

/// Fetch one student by id.
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student found", body = StudentEnvelopeSchema),
        (status = 400, description = "Invalid id", body = EmptyEnvelopeSchema),
        (status = 404, description = "No such student", body = EmptyEnvelopeSchema)
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
#[get("/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<StudentView>>> {
    let id = parse_student_id(&path)?;
    let student = state.students_query.get_by_id(id).await?;
    Ok(web::Json(ApiResponse::success(STUDENT_RETRIEVED, student)))
}

/// Fetch one student by exact email.
#[utoipa::path(
    get,
    path = "/api/students/email/{email}",
    params(("email" = String, Path, description = "Email address, matched exactly")),
    responses(
        (status = 200, description = "Student found", body = StudentEnvelopeSchema),
        (status = 404, description = "No such student", body = EmptyEnvelopeSchema)
    ),
    tags = ["students"],
    operation_id = "getStudentByEmail"
)]
#[get("/email/{email}")]
pub async fn get_student_by_email(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<StudentView>>> {
    let student = state.students_query.get_by_email(&path).await?;
    Ok(web::Json(ApiResponse::success(STUDENT_RETRIEVED, student)))
}

/// Apply a partial update.
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    request_body = UpdateStudentRequestBody,
    responses(
        (status = 200, description = "Student updated", body = StudentEnvelopeSchema),
        (status = 400, description = "Validation failed or malformed body", body = EmptyEnvelopeSchema),
        (status = 404, description = "No such student", body = EmptyEnvelopeSchema),
        (status = 409, description = "Email belongs to another student", body = EmptyEnvelopeSchema)
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateStudentRequestBody>,
) -> ApiResult<web::Json<ApiResponse<StudentView>>> {
    let id = parse_student_id(&path)?;
    let patch = UpdateStudentInput::from(payload.into_inner()).validate()?;
    let student = state.students.update(id, patch).await?;
    Ok(web::Json(ApiResponse::success(STUDENT_UPDATED, student)))
}

/// Delete a student.
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student deleted", body = EmptyEnvelopeSchema),
        (status = 400, description = "Invalid id", body = EmptyEnvelopeSchema),
        (status = 404, description = "No such student", body = EmptyEnvelopeSchema)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ApiResponse<Value>>> {
    let id = parse_student_id(&path)?;
    state.students.delete(id).await?;
    Ok(web::Json(ApiResponse::success_empty(STUDENT_DELETED)))
}

#[cfg(test)]
#[path = "students_tests.rs"]
mod tests;
