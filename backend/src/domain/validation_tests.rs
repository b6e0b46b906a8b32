//! Regression coverage for the validation gate.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn valid_create() -> CreateStudentInput {
    CreateStudentInput {
        name: Some("Jane Roe".to_owned()),
        age: Some(22),
        gender: Some("OTHER".to_owned()),
        email: Some("jane@x.com".to_owned()),
    }
}

#[rstest]
fn create_accepts_valid_input(valid_create: CreateStudentInput) {
    let student = valid_create.validate().expect("valid input");
    assert_eq!(student.name.as_str(), "Jane Roe");
    assert_eq!(student.age.get(), 22);
    assert_eq!(student.gender, Gender::Other);
    assert_eq!(student.email.as_str(), "jane@x.com");
}

#[rstest]
fn create_reports_every_missing_field() {
    let violations = CreateStudentInput::default()
        .validate()
        .expect_err("nothing supplied");

    assert_eq!(violations.len(), 4);
    assert_eq!(violations.get(FIELD_NAME), Some("Name is required"));
    assert_eq!(violations.get(FIELD_AGE), Some("Age is required"));
    assert_eq!(violations.get(FIELD_GENDER), Some("Gender is required"));
    assert_eq!(violations.get(FIELD_EMAIL), Some("Email is required"));
}

#[rstest]
fn create_treats_blank_text_as_missing(valid_create: CreateStudentInput) {
    let input = CreateStudentInput {
        name: Some("  ".to_owned()),
        gender: Some(String::new()),
        email: Some(" ".to_owned()),
        ..valid_create
    };

    let violations = input.validate().expect_err("blank fields");

    assert_eq!(violations.get(FIELD_NAME), Some("Name is required"));
    assert_eq!(violations.get(FIELD_GENDER), Some("Gender is required"));
    assert_eq!(violations.get(FIELD_EMAIL), Some("Email is required"));
    assert_eq!(violations.get(FIELD_AGE), None);
}

#[rstest]
fn create_reports_every_broken_constraint() {
    let input = CreateStudentInput {
        name: Some("J".to_owned()),
        age: Some(151),
        gender: Some("male".to_owned()),
        email: Some("not-an-email".to_owned()),
    };

    let violations = input.validate().expect_err("every field invalid");

    assert_eq!(
        violations.iter().collect::<Vec<_>>(),
        vec![
            (FIELD_AGE, "Age must not exceed 150"),
            (FIELD_EMAIL, "Email must be valid"),
            (FIELD_GENDER, "Gender must be MALE, FEMALE, or OTHER"),
            (FIELD_NAME, "Name must be between 2 and 100 characters"),
        ]
    );
}

#[rstest]
#[case(0, "Age must be at least 1")]
#[case(200, "Age must not exceed 150")]
fn create_reports_single_bad_age(
    valid_create: CreateStudentInput,
    #[case] age: i64,
    #[case] message: &str,
) {
    let input = CreateStudentInput {
        age: Some(age),
        ..valid_create
    };

    let violations = input.validate().expect_err("age out of range");

    assert_eq!(violations.len(), 1);
    assert_eq!(violations.get(FIELD_AGE), Some(message));
}

#[rstest]
fn update_accepts_empty_input() {
    let patch = UpdateStudentInput::default()
        .validate()
        .expect("empty update is valid");
    assert_eq!(patch, StudentPatch::default());
}

#[rstest]
fn update_validates_only_present_fields() {
    let input = UpdateStudentInput {
        age: Some(23),
        ..UpdateStudentInput::default()
    };

    let patch = input.validate().expect("age only");

    assert_eq!(patch.age.map(Age::get), Some(23));
    assert!(patch.name.is_none());
    assert!(patch.gender.is_none());
    assert!(patch.email.is_none());
}

#[rstest]
fn update_reports_every_present_violation() {
    let input = UpdateStudentInput {
        name: Some("   ".to_owned()),
        age: None,
        gender: Some("OTHERS".to_owned()),
        email: Some(String::new()),
    };

    let violations = input.validate().expect_err("invalid patch");

    assert_eq!(violations.len(), 3);
    assert_eq!(violations.get(FIELD_NAME), Some("Name must not be blank"));
    assert_eq!(
        violations.get(FIELD_GENDER),
        Some("Gender must be MALE, FEMALE, or OTHER")
    );
    assert_eq!(violations.get(FIELD_EMAIL), Some("Email must be valid"));
}

#[rstest]
fn record_keeps_first_message_per_field() {
    let mut violations = FieldViolations::default();
    violations.record(FIELD_NAME, "first");
    violations.record(FIELD_NAME, "second");

    assert_eq!(violations.len(), 1);
    assert_eq!(violations.get(FIELD_NAME), Some("first"));
}

#[rstest]
fn violations_serialise_as_flat_object() {
    let mut violations = FieldViolations::default();
    violations.record(FIELD_EMAIL, "Email must be valid");

    let value = serde_json::to_value(&violations).expect("serialise violations");

    assert_eq!(value, serde_json::json!({"email": "Email must be valid"}));
    assert_eq!(violations.into_value(), value);
}

#[rstest]
#[case("  ", "Name must not be blank")]
#[case("J", "Name must be between 2 and 100 characters")]
fn update_holds_present_name_to_creation_rules(#[case] name: &str, #[case] message: &str) {
    let input = UpdateStudentInput {
        name: Some(name.to_owned()),
        ..UpdateStudentInput::default()
    };

    let violations = input.validate().expect_err("name rejected");

    assert_eq!(violations.len(), 1);
    assert_eq!(violations.get(FIELD_NAME), Some(message));
}

#[rstest]
#[case("a..b@x.com")]
#[case("jane@x.com.")]
fn update_rejects_malformed_email(#[case] email: &str) {
    let input = UpdateStudentInput {
        email: Some(email.to_owned()),
        ..UpdateStudentInput::default()
    };

    let violations = input.validate().expect_err("email rejected");

    assert_eq!(violations.get(FIELD_EMAIL), Some("Email must be valid"));
}
