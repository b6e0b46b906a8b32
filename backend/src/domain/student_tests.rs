//! Regression coverage for student field validation.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};

#[fixture]
fn instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 8, 30, 0)
        .single()
        .expect("valid fixture instant")
}

#[fixture]
fn new_student() -> NewStudent {
    NewStudent {
        name: StudentName::new("Jane Roe").expect("valid name"),
        age: Age::new(22).expect("valid age"),
        gender: Gender::Other,
        email: EmailAddress::new("jane@x.com").expect("valid email"),
    }
}

#[rstest]
#[case("1", 1)]
#[case("42", 42)]
fn student_id_parses_positive_integers(#[case] raw: &str, #[case] expected: i64) {
    let id: StudentId = raw.parse().expect("valid id");
    assert_eq!(id.get(), expected);
}

#[rstest]
#[case("0")]
#[case("-3")]
#[case("abc")]
#[case("")]
fn student_id_rejects_invalid_input(#[case] raw: &str) {
    assert_eq!(
        raw.parse::<StudentId>(),
        Err(StudentValidationError::InvalidId)
    );
}

#[rstest]
#[case("Al")]
#[case("Jane Roe")]
#[case("Zoë Ångström")]
fn name_accepts_valid_lengths(#[case] raw: &str) {
    let name = StudentName::new(raw).expect("valid name");
    assert_eq!(name.as_str(), raw);
}

#[rstest]
fn name_accepts_boundary_maximum() {
    let raw = "a".repeat(NAME_MAX);
    assert!(StudentName::new(raw).is_ok());
}

#[rstest]
#[case("", StudentValidationError::NameBlank)]
#[case("   ", StudentValidationError::NameBlank)]
#[case("J", StudentValidationError::NameLength { min: NAME_MIN, max: NAME_MAX })]
fn name_rejects_invalid_input(#[case] raw: &str, #[case] expected: StudentValidationError) {
    assert_eq!(StudentName::new(raw), Err(expected));
}

#[rstest]
fn name_rejects_overlong_input() {
    let raw = "a".repeat(NAME_MAX + 1);
    let err = StudentName::new(raw).expect_err("too long");
    assert_eq!(err.to_string(), "Name must be between 2 and 100 characters");
}

#[rstest]
#[case(1)]
#[case(22)]
#[case(150)]
fn age_accepts_range(#[case] raw: i64) {
    let age = Age::new(raw).expect("valid age");
    assert_eq!(i64::from(age.get()), raw);
}

#[rstest]
#[case(0, "Age must be at least 1")]
#[case(-5, "Age must be at least 1")]
#[case(151, "Age must not exceed 150")]
#[case(i64::MAX, "Age must not exceed 150")]
fn age_rejects_out_of_range(#[case] raw: i64, #[case] message: &str) {
    let err = Age::new(raw).expect_err("out of range");
    assert_eq!(err.to_string(), message);
}

#[rstest]
#[case("MALE", Gender::Male)]
#[case("FEMALE", Gender::Female)]
#[case("OTHER", Gender::Other)]
fn gender_parses_exact_spelling(#[case] raw: &str, #[case] expected: Gender) {
    assert_eq!(raw.parse::<Gender>(), Ok(expected));
    assert_eq!(expected.as_str(), raw);
}

#[rstest]
#[case("male")]
#[case("Female")]
#[case("UNKNOWN")]
#[case("")]
fn gender_rejects_other_spellings(#[case] raw: &str) {
    assert_eq!(
        raw.parse::<Gender>(),
        Err(StudentValidationError::InvalidGender)
    );
}

#[rstest]
fn gender_serialises_upper_case() {
    let value = serde_json::to_value(Gender::Female).expect("serialise gender");
    assert_eq!(value, serde_json::json!("FEMALE"));
}

#[rstest]
#[case("jane@x.com")]
#[case("first.last+tag@sub.example.org")]
#[case("user@localhost")]
#[case("o'brien!#$%&*=?^_`{|}~@x-y.co.uk")]
#[case("zoë@bücher.de")]
fn email_accepts_valid_shapes(#[case] raw: &str) {
    let email = EmailAddress::new(raw).expect("valid email");
    assert_eq!(email.as_str(), raw);
}

#[rstest]
#[case("")]
#[case("plainaddress")]
#[case("@x.com")]
#[case("jane@")]
#[case("jane@@x.com")]
#[case("jane@x@y.com")]
#[case("jane doe@x.com")]
#[case(".jane@x.com")]
#[case("a..b@x.com")]
#[case("jane.@x.com")]
#[case("ja,ne@x.com")]
#[case("<jane>@x.com")]
#[case("jane@x..com")]
#[case("jane@x.com.")]
#[case("jane@-x.com")]
#[case("jane@x-.com")]
fn email_rejects_invalid_shapes(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(StudentValidationError::InvalidEmail)
    );
}

#[rstest]
fn email_rejects_overlong_local_part() {
    let raw = format!("{}@x.com", "a".repeat(EMAIL_LOCAL_MAX + 1));
    assert!(EmailAddress::new(raw).is_err());
}

#[rstest]
fn new_student_has_equal_timestamps(new_student: NewStudent, instant: DateTime<Utc>) {
    let student = Student::new(new_student, instant);
    assert!(student.id.is_none());
    assert_eq!(student.created_at, instant);
    assert_eq!(student.updated_at, student.created_at);
}

#[rstest]
fn view_projects_saved_student(new_student: NewStudent, instant: DateTime<Utc>) {
    let mut student = Student::new(new_student, instant);
    student.id = Some(StudentId::new(7).expect("valid id"));

    let view = StudentView::try_from(student).expect("saved student projects");

    assert_eq!(view.id, 7);
    assert_eq!(view.name, "Jane Roe");
    assert_eq!(view.age, 22);
    assert_eq!(view.gender, Gender::Other);
    assert_eq!(view.email, "jane@x.com");
    assert_eq!(view.created_at, instant);
}

#[rstest]
fn view_serialises_camel_case(new_student: NewStudent, instant: DateTime<Utc>) {
    let mut student = Student::new(new_student, instant);
    student.id = Some(StudentId::new(1).expect("valid id"));
    let view = StudentView::try_from(student).expect("saved student projects");

    let value = serde_json::to_value(&view).expect("serialise view");

    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());
    assert_eq!(value.get("gender"), Some(&serde_json::json!("OTHER")));
}

#[rstest]
fn view_rejects_unsaved_student(new_student: NewStudent, instant: DateTime<Utc>) {
    let student = Student::new(new_student, instant);
    let err = StudentView::try_from(student).expect_err("unsaved student");
    assert_eq!(err.code(), crate::domain::ErrorCode::Unexpected);
}
