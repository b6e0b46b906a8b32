//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the student endpoints, the health probes and the
//! schema wrappers from [`crate::inbound::http::schemas`], which describe the
//! domain types without coupling them to utoipa.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{
    EmptyEnvelopeSchema, GenderSchema, StudentEnvelopeSchema, StudentListEnvelopeSchema,
    StudentSchema,
};
use crate::inbound::http::students::{CreateStudentRequestBody, UpdateStudentRequestBody};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student registry API",
        description = "Create, read, update and delete student records.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::get_student_by_email,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        GenderSchema,
        StudentSchema,
        StudentEnvelopeSchema,
        StudentListEnvelopeSchema,
        EmptyEnvelopeSchema,
        CreateStudentRequestBody,
        UpdateStudentRequestBody,
    )),
    tags(
        (name = "students", description = "Student record management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const STUDENT_SCHEMA_NAME: &str = "crate.domain.StudentView";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("id")]
    #[case("name")]
    #[case("age")]
    #[case("gender")]
    #[case("email")]
    #[case("createdAt")]
    #[case("updatedAt")]
    fn student_schema_uses_wire_field_names(#[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let student = schemas.get(STUDENT_SCHEMA_NAME).expect("Student schema");

        assert_object_schema_has_field(student, field);
    }

    #[rstest]
    #[case("/api/students")]
    #[case("/api/students/{id}")]
    #[case("/api/students/email/{email}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_endpoint_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[test]
    fn student_item_path_lists_all_methods() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/api/students/{id}")
            .expect("item path");

        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
